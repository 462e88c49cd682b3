use kinolist_api::{MovieApi, MovieRecord};
use tracing::{debug, error};

use crate::collection::{self, WatchlistLoad};
use crate::detail::DetailController;
use crate::identity::UserIdentity;
use crate::screen::{open_detail, Action, ScreenView};

pub const LOAD_FAILED: &str = "Failed to load watchlist.";
pub const EMPTY: &str = "Your watchlist is empty.";

/// Watchlist screen state.
#[derive(Debug)]
pub struct Watchlist {
    movies: Vec<MovieRecord>,
    loading: bool,
    error: Option<String>,
    detail: Option<DetailController>,
}

impl Default for Watchlist {
    fn default() -> Self {
        Self::new()
    }
}

impl Watchlist {
    /// A fresh screen starts in the loading state.
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            loading: true,
            error: None,
            detail: None,
        }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn detail(&self) -> Option<&DetailController> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailController> {
        self.detail.as_mut()
    }

    /// (Re)load the list. Anonymous users are sent home.
    pub async fn load<A: MovieApi>(&mut self, api: &A, user: &UserIdentity) -> Action {
        self.loading = true;
        self.error = None;

        let action = match collection::load_watchlist(api, user).await {
            Ok(WatchlistLoad::Redirect(page)) => Action::NavigateTo(page),
            Ok(WatchlistLoad::Loaded(movies)) => {
                self.movies = movies;
                Action::None
            }
            Err(e) => {
                error!(error = %e, "Error fetching watchlist");
                self.movies.clear();
                self.error = Some(LOAD_FAILED.to_string());
                Action::None
            }
        };

        self.loading = false;
        action
    }

    /// Open the detail view for the entry at `index`.
    pub async fn select<A: MovieApi>(
        &mut self,
        api: &A,
        user: &UserIdentity,
        index: usize,
    ) -> Action {
        let Some(movie) = self.movies.get(index).cloned() else {
            return Action::SetStatus(format!("No watchlist entry #{}", index + 1));
        };
        debug!(title = %movie.title, "Watchlist entry selected");
        self.detail = Some(open_detail(api, user, movie).await);
        Action::None
    }

    /// Leave the detail view and reload, picking up any toggles made there.
    pub async fn back<A: MovieApi>(&mut self, api: &A, user: &UserIdentity) -> Action {
        debug!("Returning to watchlist from movie detail");
        self.detail = None;
        self.load(api, user).await
    }

    pub fn view(&self) -> ScreenView<'_> {
        if self.loading {
            ScreenView::Loading
        } else if let Some(err) = &self.error {
            ScreenView::Error(err)
        } else if self.movies.is_empty() {
            ScreenView::Empty(EMPTY)
        } else if let Some(detail) = &self.detail {
            ScreenView::Detail(detail)
        } else {
            ScreenView::List(&self.movies)
        }
    }
}
