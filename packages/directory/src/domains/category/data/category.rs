use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::category::models::{Category, CategoryWithParent};

/// Transport representation of a category.
///
/// Serializes to exactly `{id, name, parent_id, parent_name}` — the wire
/// shape existing consumers depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub parent_name: Option<String>,
}

impl From<CategoryWithParent> for CategoryData {
    fn from(category: CategoryWithParent) -> Self {
        Self {
            id: category.id,
            name: category.name,
            parent_id: category.parent_id,
            parent_name: category.parent_name,
        }
    }
}

impl From<Category> for CategoryData {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            parent_id: category.parent_id,
            parent_name: None,
        }
    }
}
