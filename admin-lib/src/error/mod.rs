//! Error types

mod api;
mod auth;

pub use api::*;
pub use auth::*;

/// Top-level error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An authentication or session operation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}
