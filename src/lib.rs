//! GovScheme - eligibility matching for government welfare schemes
//!
//! This library matches a citizen's demographic profile against a static
//! catalog of schemes and renders the result for a chat agent.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, format_matches};
pub use crate::models::{UserProfile, SchemeRecord, SchemeConditions, OccupationRequirement, FindSchemesRequest, FindSchemesResponse};
pub use crate::services::{CatalogError, CatalogStore, FindSchemesTool, SchemeCatalog, ValidationMode};
