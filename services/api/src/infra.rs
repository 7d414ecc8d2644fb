use card_advisor::config::AppConfig;
use card_advisor::error::AppError;
use card_advisor::recommendations::{CardCatalog, CatalogError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// A `--catalog` flag wins over `APP_CATALOG_PATH`.
pub(crate) fn resolve_catalog_path(
    override_path: Option<PathBuf>,
) -> Result<Option<PathBuf>, AppError> {
    match override_path {
        Some(path) => Ok(Some(path)),
        None => Ok(AppConfig::load()?.catalog.path),
    }
}

pub(crate) fn load_catalog(path: Option<&Path>) -> Result<CardCatalog, CatalogError> {
    match path {
        Some(path) => CardCatalog::from_path(path),
        None => {
            let catalog = CardCatalog::standard()?;
            info!(cards = catalog.cards().len(), "using built-in card catalog");
            Ok(catalog)
        }
    }
}
