// Model exports
pub mod domain;
pub mod numeric;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, SchemeRecord, SchemeConditions, OccupationRequirement, Condition, eq_ignore_case};
pub use requests::FindSchemesRequest;
pub use responses::{FindSchemesResponse, CatalogResponse, ReloadResponse, HealthResponse, ErrorResponse};
