//! Dog domain model

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Message reported when a write is missing a required field
pub const MISSING_FIELDS_MESSAGE: &str = "All dogs need a name and weight.";

/// Dog entity. The id is assigned by the repository and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Dog {
    pub id: String,
    pub name: String,
    pub weight: f64,
}

/// Body of a create or update request.
///
/// Both fields are optional on the wire so a missing field surfaces as a
/// validation failure rather than a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DogPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl DogPayload {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: Some(name.into()),
            weight: Some(weight),
        }
    }
}

/// Validated fields handed to the repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DogInput {
    pub name: String,
    pub weight: f64,
}

impl TryFrom<DogPayload> for DogInput {
    type Error = AppError;

    fn try_from(payload: DogPayload) -> Result<Self, Self::Error> {
        match payload {
            // An empty name or a zero weight counts as absent.
            DogPayload {
                name: Some(name),
                weight: Some(weight),
            } if !name.is_empty() && weight != 0.0 => Ok(DogInput { name, weight }),
            _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}
