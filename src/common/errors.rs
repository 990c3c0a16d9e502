use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read feature list {path:?}: {source}")]
    FeatureFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid feature list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
