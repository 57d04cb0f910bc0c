use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use storage::repository::Storage;

use crate::Clock;
use crate::catalog::ContentCatalog;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles the app-facing services over a chosen storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<ContentCatalog>,
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Load the bundled curriculum and restore progress from `storage`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the bundled curriculum is invalid.
    pub async fn new(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = ContentCatalog::bundled()?;
        Ok(Self::with_catalog(storage, clock, catalog).await)
    }

    /// Same as [`AppServices::new`] with a caller-provided curriculum.
    pub async fn with_catalog(storage: Storage, clock: Clock, catalog: ContentCatalog) -> Self {
        info!(
            chapters = catalog.chapters().len(),
            lessons = catalog.total_lessons(),
            quizzes = catalog.quizzes().len(),
            "curriculum loaded"
        );
        let progress = ProgressService::load(clock, Arc::clone(&storage.snapshots)).await;
        Self {
            catalog: Arc::new(catalog),
            progress: Arc::new(progress),
        }
    }

    /// Build services whose progress is lost on exit.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the bundled curriculum is invalid.
    pub async fn new_in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::new(Storage::in_memory(), clock).await
    }

    /// Build services backed by JSON files under `dir`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the directory cannot be prepared or the
    /// curriculum is invalid.
    pub async fn new_file(dir: impl Into<PathBuf>, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::file(dir)?;
        Self::new(storage, clock).await
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// curriculum is invalid.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::new(storage, clock).await
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<ContentCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}
