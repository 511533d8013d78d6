use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The format selector does not name one of the supported renderers.
    #[error("unknown inventory format: {0}")]
    UnknownFormat(String),

    /// The output sink refused the rendered bytes.
    #[error("failed to write inventory: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode inventory as json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode inventory as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
