//! Book model

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

/// Book record held by the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "1984")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "George Orwell")]
    pub author: String,
}

impl Book {
    pub fn new(id: i32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct BookRequest {
    #[validate(custom(function = "validate_not_blank", message = "Title is required."))]
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Dune")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Frank Herbert")]
    pub author: String,
}

impl BookRequest {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

/// JSON `null` reads as an empty string, leaving the rules to the validator
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
