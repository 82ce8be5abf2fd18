use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::numeric::{optional_whole_number, whole_number};

/// Citizen profile submitted for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "whole_number")]
    pub age: u32,
    pub gender: String,
    /// Annual family income
    #[serde(deserialize_with = "whole_number")]
    pub income: u64,
    pub state: String,
    pub occupation: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub disability_percent: u8,
}

/// A welfare scheme as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SchemeRecord {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    pub benefits: String,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_conditions"))]
    pub conditions: SchemeConditions,
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_conditions(conditions: &SchemeConditions) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (conditions.min_age, conditions.max_age) {
        if min > max {
            return Err(ValidationError::new("min_age_above_max_age"));
        }
    }
    if conditions.min_disability.is_some_and(|d| d > 100) {
        return Err(ValidationError::new("min_disability_out_of_range"));
    }
    if let Some(OccupationRequirement::AnyOf(accepted)) = &conditions.occupation {
        if accepted.is_empty() {
            return Err(ValidationError::new("empty_occupation_list"));
        }
    }
    Ok(())
}

/// Eligibility conditions; an absent field imposes no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeConditions {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_whole_number")]
    pub min_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_whole_number")]
    pub max_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_whole_number")]
    pub max_income: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_whole_number")]
    pub min_disability: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<OccupationRequirement>,
}

/// Occupation condition: one required value or a set of acceptable ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OccupationRequirement {
    Single(String),
    AnyOf(Vec<String>),
}

impl OccupationRequirement {
    /// Case-insensitive membership test
    pub fn accepts(&self, occupation: &str) -> bool {
        match self {
            OccupationRequirement::Single(required) => eq_ignore_case(required, occupation),
            OccupationRequirement::AnyOf(accepted) => {
                accepted.iter().any(|candidate| eq_ignore_case(candidate, occupation))
            }
        }
    }
}

/// Unicode-aware case-insensitive equality
#[inline]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}

/// Which condition rejected a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    MinAge,
    MaxAge,
    MaxIncome,
    Gender,
    State,
    MinDisability,
    Occupation,
}
