use kinolist_api::{ApiError, MovieApi, MovieRecord};
use tracing::{error, info, warn};

use crate::detail::DetailController;
use crate::identity::UserIdentity;
use crate::screen::{open_detail, Action, ScreenView};

pub const EMPTY_QUERY: &str = "Search query cannot be empty.";
pub const RATE_LIMITED: &str = "Too many searches, try again shortly.";
pub const SEARCH_FAILED: &str = "Failed to search movies.";
pub const NO_RESULTS: &str = "No movies found.";

/// Search screen state. Only reachable for signed-in users.
#[derive(Debug, Default)]
pub struct Search {
    query: String,
    results: Vec<MovieRecord>,
    searched: bool,
    loading: bool,
    error: Option<String>,
    detail: Option<DetailController>,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MovieRecord] {
        &self.results
    }

    pub fn detail(&self) -> Option<&DetailController> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailController> {
        self.detail.as_mut()
    }

    /// Run a search. Blank queries are rejected before any request.
    pub async fn submit<A: MovieApi>(&mut self, api: &A, query: &str) -> Action {
        let query = query.trim();
        self.query = query.to_string();
        self.detail = None;

        if query.is_empty() {
            self.error = Some(EMPTY_QUERY.to_string());
            return Action::None;
        }

        self.loading = true;
        self.error = None;
        let action = match api.search_movies(query).await {
            Ok(results) => {
                info!(query, count = results.len(), "Search finished");
                self.results = results;
                Action::None
            }
            Err(ApiError::RateLimited) => {
                warn!(query, "Search rate limited");
                self.results.clear();
                self.error = Some(RATE_LIMITED.to_string());
                Action::SetStatus(RATE_LIMITED.to_string())
            }
            Err(e) => {
                error!(query, error = %e, "Search failed");
                self.results.clear();
                self.error = Some(SEARCH_FAILED.to_string());
                Action::None
            }
        };
        self.searched = true;
        self.loading = false;
        action
    }

    pub async fn select<A: MovieApi>(
        &mut self,
        api: &A,
        user: &UserIdentity,
        index: usize,
    ) -> Action {
        let Some(movie) = self.results.get(index).cloned() else {
            return Action::SetStatus(format!("No result #{}", index + 1));
        };
        self.detail = Some(open_detail(api, user, movie).await);
        Action::None
    }

    pub fn back(&mut self) -> Action {
        self.detail = None;
        Action::None
    }

    pub fn view(&self) -> ScreenView<'_> {
        if self.loading {
            ScreenView::Loading
        } else if let Some(err) = &self.error {
            ScreenView::Error(err)
        } else if let Some(detail) = &self.detail {
            ScreenView::Detail(detail)
        } else if self.searched && self.results.is_empty() {
            ScreenView::Empty(NO_RESULTS)
        } else {
            ScreenView::List(&self.results)
        }
    }
}
