use thiserror::Error;

/// A single field-level validation failure.
///
/// `Format` carries an element index when the failing value lives inside a
/// collection field (phones, emails, urls).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Presence {
        field: &'static str,
    },
    Format {
        field: &'static str,
        index: Option<usize>,
        value: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Presence { field } => write!(f, "{} can't be blank", field),
            Self::Format {
                field,
                index: Some(i),
                value,
            } => write!(f, "{}[{}]: {:?} is not valid", field, i, value),
            Self::Format {
                field,
                index: None,
                value,
            } => write!(f, "{}: {:?} is not valid", field, value),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The full set of validation failures for one submission.
///
/// Validation never short-circuits: every field is checked and every
/// violation is reported together, so a form can surface all problems at
/// once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All errors recorded against a given field.
    pub fn for_field(&self, field: &str) -> Vec<&ValidationError> {
        self.0
            .iter()
            .filter(|e| match e {
                ValidationError::Presence { field: f } => *f == field,
                ValidationError::Format { field: f, .. } => *f == field,
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Failures from the external geocode resolver, distinct from the
/// "no candidate found" condition so callers can tell the two apart.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoding service error: {0}")]
    Service(String),
}

/// Top-level error taxonomy for the directory data layer
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("No location found for {query:?}")]
    GeocodeNotFound { query: String },

    #[error(transparent)]
    GeocodeService(#[from] GeocodeError),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}
