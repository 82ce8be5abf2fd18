use crate::core::{format_catalog_error, format_matches, Matcher};
use crate::models::{FindSchemesRequest, UserProfile};
use crate::services::CatalogStore;
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

/// The `find_schemes` tool handed to a chat agent
///
/// Holds its name, description and input schema so they can be registered
/// once, and answers calls with the plain text block the agent relays.
pub struct FindSchemesTool {
    name: String,
    description: String,
    schema: Value,
    catalog: Arc<CatalogStore>,
    matcher: Matcher,
}

impl FindSchemesTool {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            name: "find_schemes".to_string(),
            description: "Searches the scheme catalog to find government schemes the user is eligible for."
                .to_string(),
            schema: json!({
                "type": "object",
                "properties": {
                    "age": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "User's age in years."
                    },
                    "gender": {
                        "type": "string",
                        "description": "User's gender ('male', 'female', 'other')."
                    },
                    "income": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Annual family income in Rupees."
                    },
                    "state": {
                        "type": "string",
                        "description": "User's home state (e.g. 'Uttar Pradesh', 'Telangana')."
                    },
                    "occupation": {
                        "type": "string",
                        "description": "User's job (e.g. 'student', 'farmer', 'street_vendor', 'unemployed')."
                    },
                    "disability_percent": {
                        "type": "integer",
                        "minimum": 0,
                        "maximum": 100,
                        "description": "Percentage of disability (0 if none)."
                    }
                },
                "required": ["age", "gender", "income", "state", "occupation", "disability_percent"]
            }),
            catalog,
            matcher: Matcher::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// JSON schema of the tool's arguments
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Run the tool on the agent's JSON arguments
    pub async fn execute(&self, input: &Value) -> String {
        let request: FindSchemesRequest = match serde_json::from_value(input.clone()) {
            Ok(req) => req,
            Err(e) => return format!("Error: invalid arguments: {}", e),
        };

        if let Err(errors) = request.validate() {
            return format!("Error: invalid arguments: {}", errors);
        }

        self.find(&UserProfile::from(request)).await
    }

    /// Match a profile against the current catalog and render the result
    pub async fn find(&self, profile: &UserProfile) -> String {
        let catalog = match self.catalog.current().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("find_schemes called while catalog unavailable: {}", e);
                return format_catalog_error(&e);
            }
        };

        let result = self.matcher.find_schemes(profile, catalog.schemes());

        tracing::debug!(
            "find_schemes matched {} of {} schemes",
            result.schemes.len(),
            result.total_schemes
        );

        format_matches(&result)
    }
}
