use crate::models::SchemeRecord;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;
use validator::Validate;

/// Errors that can occur while loading the scheme catalog
///
/// All of these mean the catalog is unavailable, which callers must keep
/// apart from a query that simply matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("schemes catalog not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read schemes catalog {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("invalid schemes catalog JSON: {0}")]
    Parse(String),

    #[error("invalid scheme at index {index}: {reason}")]
    InvalidScheme { index: usize, reason: String },
}

/// What to do with a malformed catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Drop the entry and log a warning
    #[default]
    Skip,
    /// Reject the whole catalog
    Strict,
}

fn check_scheme(value: Value) -> Result<SchemeRecord, String> {
    let scheme: SchemeRecord = serde_json::from_value(value).map_err(|e| e.to_string())?;
    scheme.validate().map_err(|e| e.to_string())?;
    Ok(scheme)
}

/// Read-only snapshot of the scheme catalog
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<SchemeRecord>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
    revision: Uuid,
    skipped: usize,
}

impl SchemeCatalog {
    /// Build a catalog from already validated records
    pub fn new(schemes: Vec<SchemeRecord>) -> Self {
        Self {
            schemes,
            source: None,
            loaded_at: Utc::now(),
            revision: Uuid::new_v4(),
            skipped: 0,
        }
    }

    /// Parse a catalog from its JSON text
    ///
    /// The document must be an array of scheme objects. Entries that do not
    /// decode or fail validation are dropped in `Skip` mode and abort the
    /// load in `Strict` mode.
    pub fn from_json_str(json: &str, mode: ValidationMode) -> Result<Self, CatalogError> {
        let entries: Vec<Value> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut schemes = Vec::with_capacity(entries.len());
        let mut skipped = 0;

        for (index, entry) in entries.into_iter().enumerate() {
            match check_scheme(entry) {
                Ok(scheme) => schemes.push(scheme),
                Err(reason) => match mode {
                    ValidationMode::Strict => {
                        return Err(CatalogError::InvalidScheme { index, reason });
                    }
                    ValidationMode::Skip => {
                        tracing::warn!("Skipping invalid scheme at index {}: {}", index, reason);
                        skipped += 1;
                    }
                },
            }
        }

        let mut catalog = Self::new(schemes);
        catalog.skipped = skipped;
        Ok(catalog)
    }

    /// Load a catalog file
    pub async fn load<P: AsRef<Path>>(path: P, mode: ValidationMode) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(path.to_path_buf())
            } else {
                CatalogError::Unreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })?;

        let mut catalog = Self::from_json_str(&json, mode)?;
        catalog.source = Some(path.to_path_buf());

        tracing::debug!(
            "Loaded {} schemes from {} ({} skipped)",
            catalog.schemes.len(),
            path.display(),
            catalog.skipped
        );

        Ok(catalog)
    }

    pub fn schemes(&self) -> &[SchemeRecord] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn revision(&self) -> Uuid {
        self.revision
    }

    /// Number of entries dropped during a `Skip` mode load
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Owner of the current catalog snapshot
///
/// The catalog is read once when the store is opened and again only on
/// `reload`. Readers get an `Arc` to the snapshot, so a reload never
/// disturbs an in-flight match.
pub struct CatalogStore {
    path: PathBuf,
    mode: ValidationMode,
    current: RwLock<Result<Arc<SchemeCatalog>, CatalogError>>,
    // Held across read-and-install so the last reload to start wins
    reload_lock: Mutex<()>,
}

impl CatalogStore {
    /// Open a store and attempt the first load
    ///
    /// A failed load leaves the store unavailable rather than failing, so the
    /// error can be reported to callers until a reload succeeds.
    pub async fn open<P: Into<PathBuf>>(path: P, mode: ValidationMode) -> Self {
        let path = path.into();
        let current = SchemeCatalog::load(&path, mode).await.map(Arc::new);

        if let Err(e) = &current {
            tracing::warn!("Scheme catalog unavailable: {}", e);
        }

        Self {
            path,
            mode,
            current: RwLock::new(current),
            reload_lock: Mutex::new(()),
        }
    }

    /// Wrap an in-memory catalog
    pub fn from_catalog(catalog: SchemeCatalog) -> Self {
        Self {
            path: catalog.source.clone().unwrap_or_default(),
            mode: ValidationMode::default(),
            current: RwLock::new(Ok(Arc::new(catalog))),
            reload_lock: Mutex::new(()),
        }
    }

    /// Current snapshot, or the error that left the catalog unavailable
    pub async fn current(&self) -> Result<Arc<SchemeCatalog>, CatalogError> {
        self.current.read().await.clone()
    }

    /// Re-read the catalog file
    ///
    /// Reloads are serialised; readers keep the old snapshot while the file
    /// is read. On failure a previously loaded snapshot stays in place.
    pub async fn reload(&self) -> Result<Arc<SchemeCatalog>, CatalogError> {
        let _reloading = self.reload_lock.lock().await;
        let loaded = SchemeCatalog::load(&self.path, self.mode).await;
        let mut current = self.current.write().await;

        match loaded {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                tracing::info!(
                    "Scheme catalog reloaded: {} schemes (revision {})",
                    catalog.len(),
                    catalog.revision()
                );
                *current = Ok(Arc::clone(&catalog));
                Ok(catalog)
            }
            Err(e) => {
                if current.is_ok() {
                    tracing::warn!("Catalog reload failed, keeping previous snapshot: {}", e);
                } else {
                    *current = Err(e.clone());
                }
                Err(e)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
