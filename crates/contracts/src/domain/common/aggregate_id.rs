use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
///
/// Catalog identities are opaque document ids issued by the API, so ids are
/// owned strings rather than `Copy` numbers.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to its wire string
    fn as_string(&self) -> String;

    /// Parse an id from a string; blank input is not an id
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Shared parsing rule for string-backed ids.
pub(crate) fn parse_opaque(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Empty identifier".to_string());
    }
    Ok(trimmed.to_string())
}
