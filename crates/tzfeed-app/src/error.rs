use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-input fault: no URL supplied and no default configured.
    #[error("No feed URL supplied and no default configured")]
    MissingSource,

    /// Upstream-dependency fault.
    #[error(transparent)]
    FetchError(#[from] crate::fetch::FetchError),

    #[error(transparent)]
    CoreError(#[from] tzfeed_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
