use thiserror::Error;

/// Host engine error types
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Invalid overlay entry at '{path}': expected a nested mapping, found {found}")]
    InvalidOverlayEntry { path: String, found: String },

    #[error("Overlay parse error: {0}")]
    OverlayParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HostError>;
