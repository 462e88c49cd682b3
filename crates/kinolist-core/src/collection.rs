//! Resolving a user's watchlist into full movie records.

use futures::future::join_all;
use kinolist_api::{ApiError, MovieApi, MovieRecord};
use tracing::{debug, info, warn};

use crate::identity::UserIdentity;
use crate::navigation::Page;

/// Result of loading the watchlist.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchlistLoad {
    /// No signed-in user; nothing was fetched.
    Redirect(Page),
    /// Movies in favorites order. Empty when the user has no favorites.
    Loaded(Vec<MovieRecord>),
}

/// Load `user`'s watchlist.
///
/// Anonymous users get a redirect home without any request being made.
/// Otherwise the favorites are fetched, then every slug is fetched
/// concurrently. One failure anywhere fails the whole load.
pub async fn load_watchlist<A: MovieApi>(
    api: &A,
    user: &UserIdentity,
) -> Result<WatchlistLoad, ApiError> {
    let Some(user_id) = user.user_id() else {
        debug!("Watchlist requested without a signed-in user");
        return Ok(WatchlistLoad::Redirect(Page::Home));
    };

    let favorites = api.favorites(user_id.as_str()).await.inspect_err(|e| {
        warn!(user = %user_id, error = %e, "Failed to fetch favorites");
    })?;

    if favorites.is_empty() {
        debug!(user = %user_id, "No favorites");
        return Ok(WatchlistLoad::Loaded(Vec::new()));
    }

    let movies = resolve_slugs(api, &favorites).await?;
    info!(user = %user_id, count = movies.len(), "Watchlist loaded");
    Ok(WatchlistLoad::Loaded(movies))
}

/// Fetch every slug concurrently and return the records in slug order.
///
/// All requests run to completion even after one fails; the first error in
/// slug order is returned and the other results are dropped.
pub async fn resolve_slugs<A: MovieApi>(
    api: &A,
    slugs: &[String],
) -> Result<Vec<MovieRecord>, ApiError> {
    debug!(count = slugs.len(), "Fetching movie details");
    let responses = join_all(slugs.iter().map(|slug| api.movie(slug))).await;

    responses
        .into_iter()
        .zip(slugs)
        .map(|(res, slug)| {
            res.inspect_err(|e| warn!(slug = %slug, error = %e, "Failed to fetch movie"))
        })
        .collect()
}
