#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0} is required")]
    Validation(&'static str),

    #[error("Dictionary JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
