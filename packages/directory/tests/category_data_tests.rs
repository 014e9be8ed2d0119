//! Category transport projection tests: field pass-through and the exact
//! serialized key set.

use chrono::Utc;
use directory_core::domains::category::{Category, CategoryData, CategoryWithParent};
use uuid::Uuid;

#[test]
fn projects_all_four_fields() {
    let parent_id = Uuid::new_v4();
    let category = CategoryWithParent {
        id: Uuid::new_v4(),
        name: "Food Pantries".to_string(),
        parent_id: Some(parent_id),
        parent_name: Some("Food".to_string()),
    };

    let data = CategoryData::from(category.clone());
    assert_eq!(data.id, category.id);
    assert_eq!(data.name, "Food Pantries");
    assert_eq!(data.parent_id, Some(parent_id));
    assert_eq!(data.parent_name.as_deref(), Some("Food"));
}

#[test]
fn root_category_projects_null_parent_fields() {
    let category = CategoryWithParent {
        id: Uuid::new_v4(),
        name: "Health".to_string(),
        parent_id: None,
        parent_name: None,
    };

    let json = serde_json::to_value(CategoryData::from(category)).unwrap();
    assert_eq!(json["name"], "Health");
    assert!(json["parent_id"].is_null());
    assert!(json["parent_name"].is_null());
}

#[test]
fn serializes_exactly_the_transport_keys() {
    let data = CategoryData::from(CategoryWithParent {
        id: Uuid::new_v4(),
        name: "Health".to_string(),
        parent_id: None,
        parent_name: None,
    });

    let json = serde_json::to_value(data).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "name", "parent_id", "parent_name"]);
}

#[test]
fn projection_from_bare_category_has_no_parent_name() {
    let category = Category {
        id: Uuid::new_v4(),
        name: "Housing".to_string(),
        parent_id: Some(Uuid::new_v4()),
        created_at: Utc::now(),
    };

    let data = CategoryData::from(category.clone());
    assert_eq!(data.parent_id, category.parent_id);
    assert_eq!(data.parent_name, None);
}
