use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{validate_not_blank, UserProfile};
use crate::models::numeric::whole_number;

/// Request to find eligible schemes
///
/// Carries the six scalar fields of the tool contract.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindSchemesRequest {
    #[serde(deserialize_with = "whole_number")]
    pub age: u32,
    #[validate(custom(function = "validate_not_blank"))]
    pub gender: String,
    #[serde(alias = "annual_income", deserialize_with = "whole_number")]
    pub income: u64,
    #[validate(custom(function = "validate_not_blank"))]
    pub state: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub occupation: String,
    #[serde(deserialize_with = "whole_number")]
    #[validate(range(max = 100))]
    pub disability_percent: u8,
}

impl From<FindSchemesRequest> for UserProfile {
    fn from(req: FindSchemesRequest) -> Self {
        UserProfile {
            age: req.age,
            gender: req.gender.trim().to_string(),
            income: req.income,
            state: req.state.trim().to_string(),
            occupation: req.occupation.trim().to_string(),
            disability_percent: req.disability_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FindSchemesRequest {
        FindSchemesRequest {
            age: 20,
            gender: "female".to_string(),
            income: 150_000,
            state: "Uttar Pradesh".to_string(),
            occupation: "student".to_string(),
            disability_percent: 0,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_disability_above_100_rejected() {
        let mut req = request();
        req.disability_percent = 101;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_state_rejected() {
        let mut req = request();
        req.state = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let mut req = request();
        req.gender = "  ".to_string();
        assert!(req.validate().is_err());

        let mut req = request();
        req.occupation = "\t".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_disability_percent_is_required() {
        let result = serde_json::from_str::<FindSchemesRequest>(
            r#"{"age": 20, "gender": "female", "income": 1, "state": "Goa", "occupation": "student"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_whole_number_floats_accepted() {
        let req: FindSchemesRequest = serde_json::from_str(
            r#"{"age": 20.0, "gender": "female", "income": 150000.0, "state": "Goa",
                "occupation": "student", "disability_percent": 0.0}"#,
        )
        .unwrap();
        assert_eq!(req.income, 150_000);
        assert_eq!(req.age, 20);
    }

    #[test]
    fn test_into_profile_trims_strings() {
        let mut req = request();
        req.state = "  Telangana ".to_string();
        let profile = UserProfile::from(req);
        assert_eq!(profile.state, "Telangana");
    }
}
