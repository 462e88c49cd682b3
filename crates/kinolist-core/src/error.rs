use kinolist_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KinolistError {
    #[error("config error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A watchlist change that did not go through; carries the user-facing message.
    #[error("{0}")]
    Watchlist(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
