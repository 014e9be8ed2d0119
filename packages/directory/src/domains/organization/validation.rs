//! Organization input validation.
//!
//! Raw client attributes are normalized first, then every declared check
//! runs to completion so the caller receives the complete set of
//! violations, never just the first one.

use serde::Deserialize;

use crate::common::utils::{
    is_blank, is_valid_email, is_valid_phone, is_valid_url, is_valid_zipcode, normalize_optional,
    normalize_text,
};
use crate::common::{ValidationError, ValidationErrors};

/// Raw attributes as submitted by a client. Unknown fields are ignored on
/// deserialization; missing fields are absent/empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrganizationAttributes {
    pub name: Option<String>,
    pub agency: Option<String>,
    pub description: Option<String>,
    pub eligibility_requirements: Option<String>,
    pub fees: Option<String>,
    pub how_to_apply: Option<String>,
    pub service_hours: Option<String>,
    pub service_wait: Option<String>,
    pub services_provided: Option<String>,
    pub target_group: Option<String>,
    pub transportation_availability: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub accessibility_options: Vec<String>,
    pub ask_for: Vec<String>,
    pub emails: Vec<String>,
    pub faxes: Vec<String>,
    pub funding_sources: Vec<String>,
    pub keywords: Vec<String>,
    pub languages_spoken: Vec<String>,
    pub leaders: Vec<String>,
    pub payments_accepted: Vec<String>,
    pub phones: Vec<String>,
    pub products_sold: Vec<String>,
    pub service_areas: Vec<String>,
    pub ttys: Vec<String>,
    pub urls: Vec<String>,
    pub market_match: bool,
}

/// A validated, normalized organization ready to persist. `coordinates` is
/// deliberately absent: it is populated only through the geocode path.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrganization {
    pub name: String,
    pub agency: Option<String>,
    pub description: Option<String>,
    pub eligibility_requirements: Option<String>,
    pub fees: Option<String>,
    pub how_to_apply: Option<String>,
    pub service_hours: Option<String>,
    pub service_wait: Option<String>,
    pub services_provided: Option<String>,
    pub target_group: Option<String>,
    pub transportation_availability: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub accessibility_options: Vec<String>,
    pub ask_for: Vec<String>,
    pub emails: Vec<String>,
    pub faxes: Vec<String>,
    pub funding_sources: Vec<String>,
    pub keywords: Vec<String>,
    pub languages_spoken: Vec<String>,
    pub leaders: Vec<String>,
    pub payments_accepted: Vec<String>,
    pub phones: Vec<String>,
    pub products_sold: Vec<String>,
    pub service_areas: Vec<String>,
    pub ttys: Vec<String>,
    pub urls: Vec<String>,
    pub market_match: bool,
}

impl ValidOrganization {
    /// Combines address fields into the single string the geocode resolver
    /// expects: `"{street_address}, {city}, {state} {zipcode}"`. Blank
    /// components are projected as empty strings; no validation here.
    pub fn address(&self) -> String {
        format_address(
            self.street_address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zipcode.as_deref(),
        )
    }
}

pub(crate) fn format_address(
    street_address: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    zipcode: Option<&str>,
) -> String {
    format!(
        "{}, {}, {} {}",
        street_address.unwrap_or_default(),
        city.unwrap_or_default(),
        state.unwrap_or_default(),
        zipcode.unwrap_or_default()
    )
}

impl OrganizationAttributes {
    /// Normalize then check every field, collecting all violations.
    pub fn validate(self) -> Result<ValidOrganization, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.as_deref().map(normalize_text).unwrap_or_default();
        if name.is_empty() {
            errors.push(ValidationError::Presence { field: "name" });
        }

        let zipcode = normalize_optional(self.zipcode.as_deref());
        if let Some(zip) = &zipcode {
            if !is_valid_zipcode(zip) {
                errors.push(ValidationError::Format {
                    field: "zipcode",
                    index: None,
                    value: zip.clone(),
                });
            }
        }

        // Blank phone entries are allowed; non-blank ones must match
        for (i, phone) in self.phones.iter().enumerate() {
            if !is_blank(phone) && !is_valid_phone(phone) {
                errors.push(ValidationError::Format {
                    field: "phones",
                    index: Some(i),
                    value: phone.clone(),
                });
            }
        }

        for (i, email) in self.emails.iter().enumerate() {
            if !is_valid_email(email) {
                errors.push(ValidationError::Format {
                    field: "emails",
                    index: Some(i),
                    value: email.clone(),
                });
            }
        }

        for (i, url) in self.urls.iter().enumerate() {
            if !is_valid_url(url) {
                errors.push(ValidationError::Format {
                    field: "urls",
                    index: Some(i),
                    value: url.clone(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidOrganization {
            name,
            agency: normalize_optional(self.agency.as_deref()),
            description: normalize_optional(self.description.as_deref()),
            eligibility_requirements: normalize_optional(self.eligibility_requirements.as_deref()),
            fees: normalize_optional(self.fees.as_deref()),
            how_to_apply: normalize_optional(self.how_to_apply.as_deref()),
            service_hours: normalize_optional(self.service_hours.as_deref()),
            service_wait: normalize_optional(self.service_wait.as_deref()),
            services_provided: normalize_optional(self.services_provided.as_deref()),
            target_group: normalize_optional(self.target_group.as_deref()),
            transportation_availability: normalize_optional(
                self.transportation_availability.as_deref(),
            ),
            street_address: normalize_optional(self.street_address.as_deref()),
            city: normalize_optional(self.city.as_deref()),
            state: normalize_optional(self.state.as_deref()),
            zipcode,
            accessibility_options: self.accessibility_options,
            ask_for: self.ask_for,
            emails: self.emails,
            faxes: self.faxes,
            funding_sources: self.funding_sources,
            keywords: self.keywords,
            languages_spoken: self.languages_spoken,
            leaders: self.leaders,
            payments_accepted: self.payments_accepted,
            phones: self.phones,
            products_sold: self.products_sold,
            service_areas: self.service_areas,
            ttys: self.ttys,
            urls: self.urls,
            market_match: self.market_match,
        })
    }
}
