use std::path::PathBuf;

use nyaya_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("section catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("section catalog has no sections to sample")]
    EmptyCatalog,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
