#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Missing element on recipe page: {field}")]
    MissingElement { field: &'static str },

    #[error("Recipe card #{index} has no link")]
    MissingLink { index: usize },

    #[error("Unknown listing url: {0}")]
    UnknownCategory(String),

    #[error("Invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Json error")]
    Json(#[from] serde_json::Error),
}
