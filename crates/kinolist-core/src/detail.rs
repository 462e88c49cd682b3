//! Detail view for a single movie and its watchlist toggle.

use kinolist_api::{MovieApi, MovieRecord};
use tracing::{debug, warn};

use crate::identity::UserIdentity;
use crate::status::{self, ToggleKind};

/// Message shown when a toggle request fails.
pub const TOGGLE_FAILED: &str = "Failed to update watchlist.";

/// Watchlist membership as known to the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Membership {
    /// Not yet looked up for the current (user, movie) pair.
    #[default]
    Unresolved,
    Resolved(bool),
}

impl Membership {
    pub fn in_watchlist(self) -> Option<bool> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(v) => Some(v),
        }
    }
}

/// How the watchlist button should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleControl {
    /// No signed-in user: no button at all.
    Hidden,
    /// Membership still unresolved.
    Disabled,
    /// Clickable; carries the current membership.
    Ready { in_watchlist: bool },
}

impl ToggleControl {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready { in_watchlist: true } => "Remove from Watchlist",
            Self::Hidden | Self::Disabled | Self::Ready { in_watchlist: false } => {
                "Add to Watchlist"
            }
        }
    }
}

/// What a toggle request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Button was not actionable; nothing was sent.
    Ignored,
    Applied(ToggleKind),
    /// Server rejected the change; local state is unchanged.
    Failed,
}

/// State behind one mounted detail view.
///
/// Membership starts `Unresolved` and only becomes actionable after a
/// lookup for the current user. A toggle flips it only once the server has
/// confirmed the change.
#[derive(Debug, Clone)]
pub struct DetailController {
    movie: MovieRecord,
    user: UserIdentity,
    membership: Membership,
    error: Option<String>,
}

impl DetailController {
    pub fn new(movie: MovieRecord, user: UserIdentity) -> Self {
        Self {
            movie,
            user,
            membership: Membership::Unresolved,
            error: None,
        }
    }

    pub fn movie(&self) -> &MovieRecord {
        &self.movie
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn membership(&self) -> Membership {
        self.membership
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Resolve membership for the current user. Anonymous users stay
    /// unresolved; lookup failures resolve to `false`.
    pub async fn mount<A: MovieApi>(&mut self, api: &A) {
        let Some(user_id) = self.user.user_id() else {
            debug!(slug = %self.movie.slug, "Anonymous detail view, watchlist hidden");
            return;
        };
        let in_watchlist = status::fetch_status(api, user_id, &self.movie.slug).await;
        self.membership = Membership::Resolved(in_watchlist);
    }

    /// Switch to another user. Previous membership no longer applies and is
    /// looked up again.
    pub async fn set_identity<A: MovieApi>(&mut self, api: &A, user: UserIdentity) {
        if user == self.user {
            return;
        }
        self.user = user;
        self.membership = Membership::Unresolved;
        self.error = None;
        self.mount(api).await;
    }

    pub fn control(&self) -> ToggleControl {
        if !self.user.is_authenticated() {
            return ToggleControl::Hidden;
        }
        match self.membership {
            Membership::Unresolved => ToggleControl::Disabled,
            Membership::Resolved(in_watchlist) => ToggleControl::Ready { in_watchlist },
        }
    }

    /// Add or remove the movie, flipping local state after the server agrees.
    pub async fn toggle<A: MovieApi>(&mut self, api: &A) -> ToggleOutcome {
        let (Some(user_id), Membership::Resolved(current)) =
            (self.user.user_id(), self.membership)
        else {
            return ToggleOutcome::Ignored;
        };

        match status::toggle(api, user_id, &self.movie.slug, current).await {
            Ok(kind) => {
                self.membership = Membership::Resolved(!current);
                self.error = None;
                ToggleOutcome::Applied(kind)
            }
            Err(e) => {
                warn!(slug = %self.movie.slug, error = %e, "Watchlist toggle failed");
                self.error = Some(TOGGLE_FAILED.to_string());
                ToggleOutcome::Failed
            }
        }
    }
}
