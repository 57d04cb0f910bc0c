use std::sync::Arc;

use services::{AppServices, ContentCatalog, ProgressService};

/// What the views need from the composition root.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<ContentCatalog>;
    fn progress(&self) -> Arc<ProgressService>;
}

impl UiApp for AppServices {
    fn catalog(&self) -> Arc<ContentCatalog> {
        AppServices::catalog(self)
    }

    fn progress(&self) -> Arc<ProgressService> {
        AppServices::progress(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<ContentCatalog>,
    progress: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
        }
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
