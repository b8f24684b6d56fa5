use crate::domain::common::aggregate_id::parse_opaque;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_opaque(s).map(CategoryId)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Top-level taxonomy node. Read-only for the subcategory screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,

    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Resolve a category name by id within a loaded list.
pub fn find_name<'a>(categories: &'a [Category], id: &CategoryId) -> Option<&'a str> {
    categories
        .iter()
        .find(|c| &c.id == id)
        .map(|c| c.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_document_fields() {
        let json = r#"{"_id":"64f0c2","name":"Shoes","createdAt":"2024-03-15T14:02:26.123Z","__v":0}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, CategoryId::new("64f0c2"));
        assert_eq!(category.name, "Shoes");
    }

    #[test]
    fn test_find_name() {
        let categories = vec![
            Category::new(CategoryId::new("a"), "Shoes"),
            Category::new(CategoryId::new("b"), "Bags"),
        ];
        assert_eq!(find_name(&categories, &CategoryId::new("b")), Some("Bags"));
        assert_eq!(find_name(&categories, &CategoryId::new("zzz")), None);
    }

    #[test]
    fn test_id_from_string() {
        assert_eq!(
            CategoryId::from_string("a1").unwrap().as_string(),
            "a1".to_string()
        );
        assert!(CategoryId::from_string("").is_err());
    }
}
