use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::Matcher;
use crate::models::{
    CatalogResponse, ErrorResponse, FindSchemesRequest, FindSchemesResponse, HealthResponse,
    ReloadResponse, UserProfile,
};
use crate::services::{CatalogError, CatalogStore, FindSchemesTool};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub matcher: Matcher,
    pub tool: Arc<FindSchemesTool>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            tool: Arc::new(FindSchemesTool::new(Arc::clone(&catalog))),
            catalog,
            matcher: Matcher::new(),
        }
    }
}

/// Configure all scheme-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/schemes", web::get().to(list_schemes))
        .route("/schemes/find", web::post().to(find_schemes))
        .route("/schemes/find/text", web::post().to(find_schemes_text))
        .route("/catalog/reload", web::post().to(reload_catalog));
}

fn catalog_unavailable(err: &CatalogError) -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(ErrorResponse {
        error: "Catalog unavailable".to_string(),
        message: err.to_string(),
        status_code: 503,
    })
}

fn validation_failed(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let scheme_count = state.catalog.current().await.ok().map(|c| c.len());
    let status = if scheme_count.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        scheme_count,
    })
}

/// List the loaded catalog
///
/// GET /api/v1/schemes
async fn list_schemes(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.current().await {
        Ok(catalog) => HttpResponse::Ok().json(CatalogResponse {
            revision: catalog.revision(),
            loaded_at: catalog.loaded_at(),
            schemes: catalog.schemes().to_vec(),
        }),
        Err(e) => catalog_unavailable(&e),
    }
}

/// Find eligible schemes endpoint
///
/// POST /api/v1/schemes/find
///
/// Request body:
/// ```json
/// {
///   "age": 20,
///   "gender": "female",
///   "income": 150000,
///   "state": "Uttar Pradesh",
///   "occupation": "student",
///   "disability_percent": 0
/// }
/// ```
async fn find_schemes(
    state: web::Data<AppState>,
    req: web::Json<FindSchemesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_schemes request: field_errors={:?}", errors);
        return validation_failed(&errors);
    }

    let catalog = match state.catalog.current().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Cannot match schemes, catalog unavailable: {}", e);
            return catalog_unavailable(&e);
        }
    };

    let profile = UserProfile::from(req.into_inner());
    let result = state.matcher.find_schemes(&profile, catalog.schemes());

    tracing::info!(
        "Matched {} of {} schemes (age: {}, state: {}, occupation: {})",
        result.schemes.len(),
        result.total_schemes,
        profile.age,
        profile.state,
        profile.occupation
    );

    HttpResponse::Ok().json(FindSchemesResponse {
        schemes: result.to_owned_schemes(),
        total_schemes: result.total_schemes,
        matched: result.schemes.len(),
    })
}

/// Text variant of the find endpoint, as relayed by the chat agent
///
/// POST /api/v1/schemes/find/text
///
/// A missing catalog is reported in the text body with a 200 status.
async fn find_schemes_text(
    state: web::Data<AppState>,
    req: web::Json<FindSchemesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let body = state.tool.find(&UserProfile::from(req.into_inner())).await;

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body)
}

/// Explicitly reload the catalog from disk
///
/// POST /api/v1/catalog/reload
async fn reload_catalog(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.reload().await {
        Ok(catalog) => HttpResponse::Ok().json(ReloadResponse {
            revision: catalog.revision(),
            scheme_count: catalog.len(),
            loaded_at: catalog.loaded_at(),
        }),
        Err(e) => {
            tracing::error!("Catalog reload from {} failed: {}", state.catalog.path().display(), e);
            catalog_unavailable(&e)
        }
    }
}
