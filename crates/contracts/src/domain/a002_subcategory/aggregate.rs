use crate::domain::a001_category::aggregate::CategoryId;
use crate::domain::common::aggregate_id::parse_opaque;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a subcategory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubcategoryId(pub String);

impl SubcategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for SubcategoryId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_opaque(s).map(SubcategoryId)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Taxonomy node owned by exactly one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: SubcategoryId,

    pub name: String,

    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

impl Subcategory {
    pub fn new(id: SubcategoryId, name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Create/update payload. The same shape is sent for both operations, so an
/// update may move a subcategory to another parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryDto {
    pub name: String,

    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

impl SubcategoryDto {
    pub fn new(name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            name: name.into(),
            category_id,
        }
    }
}
