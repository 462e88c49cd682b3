//! Watchlist membership for a single (user, movie) pair.

use kinolist_api::{ApiError, MovieApi};
use tracing::{debug, info, warn};

use crate::identity::UserId;

/// Which mutation a toggle issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    Added,
    Removed,
}

/// Whether `slug` is in `user`'s watchlist.
///
/// Fails closed: any transport or server error reads as "not in watchlist"
/// and is only logged.
pub async fn fetch_status<A: MovieApi>(api: &A, user: &UserId, slug: &str) -> bool {
    match api.watchlist_status(user.as_str(), slug).await {
        Ok(in_watchlist) => {
            debug!(user = %user, slug, in_watchlist, "Watchlist status resolved");
            in_watchlist
        }
        Err(e) => {
            warn!(user = %user, slug, error = %e, "Watchlist status lookup failed, assuming absent");
            false
        }
    }
}

/// Remove `slug` if `currently_in_watchlist`, add it otherwise.
///
/// The caller's flag is trusted as-is; server state is not re-read first.
/// Two sessions toggling the same movie can therefore leave this client out
/// of step with the server until the next [`fetch_status`].
pub async fn toggle<A: MovieApi>(
    api: &A,
    user: &UserId,
    slug: &str,
    currently_in_watchlist: bool,
) -> Result<ToggleKind, ApiError> {
    let kind = if currently_in_watchlist {
        api.remove_from_watchlist(user.as_str(), slug).await?;
        ToggleKind::Removed
    } else {
        api.add_to_watchlist(user.as_str(), slug).await?;
        ToggleKind::Added
    };
    info!(user = %user, slug, ?kind, "Watchlist updated");
    Ok(kind)
}
