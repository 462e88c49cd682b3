//! HTTP client for the movie catalog API.
//!
//! [`MovieClient`] talks to the real server; everything above it is written
//! against the [`MovieApi`](traits::MovieApi) trait so it can run against any
//! implementation.

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::{Endpoint, MovieClient};
pub use error::ApiError;
pub use traits::MovieApi;
pub use types::MovieRecord;
