use serde::{Deserialize, Serialize};
use crate::models::domain::SchemeRecord;

/// Response for the find schemes endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindSchemesResponse {
    pub schemes: Vec<SchemeRecord>,
    pub total_schemes: usize,
    pub matched: usize,
}

/// Catalog listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub revision: uuid::Uuid,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub schemes: Vec<SchemeRecord>,
}

/// Catalog reload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub revision: uuid::Uuid,
    pub scheme_count: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub scheme_count: Option<usize>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
