use kinolist_api::{MovieApi, MovieRecord};
use tracing::error;

use crate::detail::DetailController;
use crate::identity::UserIdentity;
use crate::screen::{open_detail, Action, ScreenView};

pub const LOAD_FAILED: &str = "Failed to load movies.";
pub const EMPTY: &str = "No movies today.";

/// Home screen: today's featured movies. Open to everyone.
#[derive(Debug)]
pub struct Home {
    movies: Vec<MovieRecord>,
    loading: bool,
    error: Option<String>,
    detail: Option<DetailController>,
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

impl Home {
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

    pub async fn load<A: MovieApi>(&mut self, api: &A) -> Action {
        self.loading = true;
        self.error = None;
        match api.daily_movies().await {
            Ok(movies) => self.movies = movies,
            Err(e) => {
                error!(error = %e, "Error fetching movies of the day");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
        Action::None
    }

    pub async fn select<A: MovieApi>(
        &mut self,
        api: &A,
        user: &UserIdentity,
        index: usize,
    ) -> Action {
        let Some(movie) = self.movies.get(index).cloned() else {
            return Action::SetStatus(format!("No movie #{}", index + 1));
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
        } else if self.movies.is_empty() {
            ScreenView::Empty(EMPTY)
        } else {
            ScreenView::List(&self.movies)
        }
    }
}
