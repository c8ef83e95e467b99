use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Startup failures of the server binary. Per-request failures are
/// `ShellError` and never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
