//! Trait definition for the movie catalog backend.
//!
//! The resolvers and screens are written against [`MovieApi`] so they can be
//! driven by the HTTP client or by an in-memory stand-in.

use std::future::Future;

use crate::error::ApiError;
use crate::types::MovieRecord;

/// Calls the client makes against the catalog server.
///
/// `user` is always a real account id; callers filter out anonymous
/// sessions before reaching this layer.
pub trait MovieApi: Send + Sync {
    /// Whether `slug` is in `user`'s watchlist.
    fn watchlist_status(
        &self,
        user: &str,
        slug: &str,
    ) -> impl Future<Output = Result<bool, ApiError>> + Send;

    /// Add `slug` to `user`'s watchlist.
    fn add_to_watchlist(
        &self,
        user: &str,
        slug: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Remove `slug` from `user`'s watchlist.
    fn remove_from_watchlist(
        &self,
        user: &str,
        slug: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// The user's favorite slugs, in server order.
    fn favorites(&self, user: &str) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    /// A single movie by slug.
    fn movie(&self, slug: &str) -> impl Future<Output = Result<MovieRecord, ApiError>> + Send;

    /// Today's featured movies.
    fn daily_movies(&self) -> impl Future<Output = Result<Vec<MovieRecord>, ApiError>> + Send;

    /// Full-text movie search.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<MovieRecord>, ApiError>> + Send;

    /// The account id bound to the current session, or `None` when the
    /// server does not recognize the session.
    fn current_user(&self) -> impl Future<Output = Result<Option<String>, ApiError>> + Send;
}
