//! In-memory `MovieApi` used by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use kinolist_api::{ApiError, MovieApi, MovieRecord};

pub(crate) fn movie(slug: &str, title: &str) -> MovieRecord {
    MovieRecord {
        id: Some(slug.to_string()),
        netzkino_id: 0,
        slug: slug.to_string(),
        title: title.to_string(),
        year: "1999".into(),
        overview: String::new(),
        director: String::new(),
        cast: String::new(),
        img_netzkino: None,
        img_netzkino_small: None,
        poster_url: None,
        queries: Vec::new(),
        date_fetched: Vec::new(),
    }
}

fn server_error() -> ApiError {
    ApiError::Api {
        status: 500,
        message: "boom".into(),
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    movies: HashMap<String, MovieRecord>,
    favorites: Mutex<HashMap<String, Vec<String>>>,
    latency: HashMap<String, Duration>,
    failing_movies: HashSet<String>,
    daily: Vec<MovieRecord>,
    fail_favorites: bool,
    fail_status: bool,
    fail_toggle: bool,
    fail_daily: bool,
    rate_limit_search: bool,
    watchlist: Mutex<HashSet<(String, String)>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(mut self, movie: MovieRecord) -> Self {
        self.movies.insert(movie.slug.clone(), movie);
        self
    }

    pub fn with_favorites(self, user: &str, slugs: &[&str]) -> Self {
        self.favorites
            .lock()
            .unwrap()
            .insert(user.into(), slugs.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_latency(mut self, slug: &str, delay: Duration) -> Self {
        self.latency.insert(slug.into(), delay);
        self
    }

    pub fn with_failing_movie(mut self, slug: &str) -> Self {
        self.failing_movies.insert(slug.into());
        self
    }

    pub fn with_daily(mut self, movies: Vec<MovieRecord>) -> Self {
        self.daily = movies;
        self
    }

    pub fn with_in_watchlist(self, user: &str, slug: &str) -> Self {
        self.watchlist
            .lock()
            .unwrap()
            .insert((user.into(), slug.into()));
        self
    }

    pub fn failing_favorites(mut self) -> Self {
        self.fail_favorites = true;
        self
    }

    pub fn failing_status(mut self) -> Self {
        self.fail_status = true;
        self
    }

    pub fn failing_toggle(mut self) -> Self {
        self.fail_toggle = true;
        self
    }

    pub fn failing_daily(mut self) -> Self {
        self.fail_daily = true;
        self
    }

    pub fn rate_limited_search(mut self) -> Self {
        self.rate_limit_search = true;
        self
    }

    pub fn in_watchlist(&self, user: &str, slug: &str) -> bool {
        self.watchlist
            .lock()
            .unwrap()
            .contains(&(user.to_string(), slug.to_string()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MovieApi for FakeApi {
    async fn watchlist_status(&self, user: &str, slug: &str) -> Result<bool, ApiError> {
        self.record(format!("status {user} {slug}"));
        if self.fail_status {
            return Err(server_error());
        }
        Ok(self.in_watchlist(user, slug))
    }

    async fn add_to_watchlist(&self, user: &str, slug: &str) -> Result<(), ApiError> {
        self.record(format!("add {user} {slug}"));
        if self.fail_toggle {
            return Err(server_error());
        }
        self.watchlist
            .lock()
            .unwrap()
            .insert((user.into(), slug.into()));
        let mut favorites = self.favorites.lock().unwrap();
        let slugs = favorites.entry(user.into()).or_default();
        if !slugs.iter().any(|s| s == slug) {
            slugs.push(slug.into());
        }
        Ok(())
    }

    async fn remove_from_watchlist(&self, user: &str, slug: &str) -> Result<(), ApiError> {
        self.record(format!("remove {user} {slug}"));
        if self.fail_toggle {
            return Err(server_error());
        }
        self.watchlist
            .lock()
            .unwrap()
            .remove(&(user.to_string(), slug.to_string()));
        if let Some(slugs) = self.favorites.lock().unwrap().get_mut(user) {
            slugs.retain(|s| s != slug);
        }
        Ok(())
    }

    async fn favorites(&self, user: &str) -> Result<Vec<String>, ApiError> {
        self.record(format!("favorites {user}"));
        if self.fail_favorites {
            return Err(server_error());
        }
        Ok(self
            .favorites
            .lock()
            .unwrap()
            .get(user)
            .cloned()
            .unwrap_or_default())
    }

    async fn movie(&self, slug: &str) -> Result<MovieRecord, ApiError> {
        self.record(format!("movie {slug}"));
        if let Some(delay) = self.latency.get(slug) {
            tokio::time::sleep(*delay).await;
        }
        self.record(format!("done {slug}"));
        if self.failing_movies.contains(slug) {
            return Err(server_error());
        }
        self.movies
            .get(slug)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Movie with slug {slug} not found.")))
    }

    async fn daily_movies(&self) -> Result<Vec<MovieRecord>, ApiError> {
        self.record("daily".into());
        if self.fail_daily {
            return Err(server_error());
        }
        Ok(self.daily.clone())
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, ApiError> {
        self.record(format!("search {query}"));
        if self.rate_limit_search {
            return Err(ApiError::RateLimited);
        }
        let needle = query.to_lowercase();
        let mut hits: Vec<MovieRecord> = self
            .movies
            .values()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        hits.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(hits)
    }

    async fn current_user(&self) -> Result<Option<String>, ApiError> {
        self.record("me".into());
        Ok(None)
    }
}
