use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::ApiError;
use crate::traits::MovieApi;
use crate::types::{ActiveUser, ErrorBody, MovieRecord, WatchlistStatus};

/// Where the API lives and which session to present to it.
///
/// Built once at startup and handed to [`MovieClient::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: Url,
    /// Raw `name=value` cookie identifying an existing session.
    pub session_cookie: Option<String>,
}

impl Endpoint {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            session_cookie: None,
        }
    }

    pub fn with_session_cookie(mut self, cookie: Option<String>) -> Self {
        self.session_cookie = cookie.filter(|c| !c.trim().is_empty());
        self
    }

    /// Absolute URL for the given path segments. Segments are percent-encoded,
    /// so slugs and user ids can't escape their position in the path.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Movie catalog REST client.
///
/// Credentials travel as cookies: the jar is seeded with the configured
/// session cookie and keeps whatever the server sets afterwards. No retries,
/// no timeouts.
pub struct MovieClient {
    endpoint: Endpoint,
    http: Client,
}

impl MovieClient {
    pub fn new(endpoint: Endpoint) -> Result<Self, ApiError> {
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &endpoint.session_cookie {
            jar.add_cookie_str(cookie, &endpoint.base_url);
        }
        let http = Client::builder().cookie_provider(jar).build()?;
        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Map non-2xx responses onto [`ApiError`], keeping the server's message.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let err = error_for(status, &body);
        tracing::warn!(status = status.as_u16(), error = %err, "movie API error");
        Err(err)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        let resp = Self::check_response(resp).await?;
        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Error for a non-2xx `status` whose response body was `body`.
fn error_for(status: StatusCode, body: &str) -> ApiError {
    let message = ErrorBody::message_from(body);
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        _ => ApiError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

impl MovieApi for MovieClient {
    async fn watchlist_status(&self, user: &str, slug: &str) -> Result<bool, ApiError> {
        let url = self
            .endpoint
            .url(&["api", "users", "watchlist", user, slug])?;
        let status: WatchlistStatus = self.get_json(url).await?;
        Ok(status.in_watchlist)
    }

    async fn add_to_watchlist(&self, user: &str, slug: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint
            .url(&["api", "users", "watchlist", user, slug])?;
        tracing::debug!(%url, "POST");
        let resp = self.http.post(url).send().await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    async fn remove_from_watchlist(&self, user: &str, slug: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint
            .url(&["api", "users", "watchlist", user, slug])?;
        tracing::debug!(%url, "DELETE");
        let resp = self.http.delete(url).send().await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    async fn favorites(&self, user: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint.url(&["api", "users", "active", user])?;
        let active: ActiveUser = self.get_json(url).await?;
        Ok(active.into_favorites())
    }

    async fn movie(&self, slug: &str) -> Result<MovieRecord, ApiError> {
        let url = self.endpoint.url(&["api", "movies", slug])?;
        self.get_json(url).await
    }

    async fn daily_movies(&self) -> Result<Vec<MovieRecord>, ApiError> {
        let url = self.endpoint.url(&["api", "movies", "daily"])?;
        self.get_json(url).await
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, ApiError> {
        let mut url = self.endpoint.url(&["api", "movies", "search"])?;
        url.query_pairs_mut().append_pair("query", query);
        self.get_json(url).await
    }

    async fn current_user(&self) -> Result<Option<String>, ApiError> {
        let url = self.endpoint.url(&["api", "users", "me"])?;
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        if matches!(
            resp.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }
        let resp = Self::check_response(resp).await?;
        let body = resp.text().await?;
        let id = body.trim().trim_matches('"');
        Ok((!id.is_empty()).then(|| id.to_string()))
    }
}
