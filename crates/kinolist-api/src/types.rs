use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Movies ───────────────────────────────────────────────────────

/// A movie as served by `/api/movies/*`.
///
/// Only `slug` and `title` are required on the wire; everything else falls
/// back to an empty value so older records still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub netzkino_id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, rename = "regisseur")]
    pub director: String,
    #[serde(default, rename = "stars")]
    pub cast: String,
    #[serde(default)]
    pub img_netzkino: Option<String>,
    #[serde(default)]
    pub img_netzkino_small: Option<String>,
    #[serde(default, rename = "imgImdb")]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub queries: Vec<String>,
    #[serde(default)]
    pub date_fetched: Vec<NaiveDate>,
}

impl MovieRecord {
    /// Release year, if the server knows it. `"0"` is the server's "unknown".
    pub fn release_year(&self) -> Option<u32> {
        self.year.trim().parse::<u32>().ok().filter(|y| *y > 0)
    }

    /// Best poster available: the IMDb still first, then Netzkino artwork.
    pub fn poster(&self) -> Option<&str> {
        [&self.poster_url, &self.img_netzkino, &self.img_netzkino_small]
            .into_iter()
            .filter_map(|u| u.as_deref())
            .find(|u| !u.trim().is_empty())
    }
}

// ── Users ────────────────────────────────────────────────────────

/// Response of `GET /api/users/watchlist/{user}/{slug}`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistStatus {
    pub in_watchlist: bool,
}

/// Response of `GET /api/users/active/{user}`. Only the favorites are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub favorites: Option<Vec<String>>,
}

impl ActiveUser {
    /// Favorite slugs in server order; a missing or `null` list is empty.
    pub fn into_favorites(self) -> Vec<String> {
        self.favorites.unwrap_or_default()
    }
}

// ── Errors ───────────────────────────────────────────────────────

/// Error bodies use `message` (not found) or `error` (bad request).
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a raw body, falling back to the text itself.
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| body.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_movie() {
        let json = r#"{
            "id": "daily-1",
            "netzkinoId": 11111,
            "slug": "daily-movie-1",
            "title": "Daily Movie One",
            "year": "2025",
            "overview": "First daily test movie",
            "regisseur": "Director A",
            "stars": "Star A",
            "imgNetzkino": "img-daily1-netzkino",
            "imgNetzkinoSmall": "img-daily1-netzkino-small",
            "imgImdb": "img-daily1-imdb",
            "queries": ["daily"],
            "dateFetched": ["2025-03-01"]
        }"#;

        let movie: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(movie.slug, "daily-movie-1");
        assert_eq!(movie.netzkino_id, 11111);
        assert_eq!(movie.director, "Director A");
        assert_eq!(movie.cast, "Star A");
        assert_eq!(movie.release_year(), Some(2025));
        assert_eq!(movie.poster(), Some("img-daily1-imdb"));
        assert_eq!(
            movie.date_fetched,
            vec![NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()]
        );
    }

    #[test]
    fn test_deserialize_minimal_movie() {
        let json = r#"{ "slug": "matrix", "title": "The Matrix", "year": "0", "imgImdb": "" }"#;
        let movie: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(movie.netzkino_id, 0);
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.poster(), None);
        assert!(movie.queries.is_empty());
    }

    #[test]
    fn test_active_user_favorites() {
        let user: ActiveUser =
            serde_json::from_str(r#"{ "id": "alice", "favorites": ["matrix", "inception"] }"#)
                .unwrap();
        assert_eq!(user.into_favorites(), vec!["matrix", "inception"]);

        let user: ActiveUser = serde_json::from_str(r#"{ "id": "bob", "favorites": null }"#).unwrap();
        assert!(user.into_favorites().is_empty());

        let user: ActiveUser = serde_json::from_str(r#"{ "id": "carol" }"#).unwrap();
        assert!(user.into_favorites().is_empty());
    }

    #[test]
    fn test_watchlist_status() {
        let status: WatchlistStatus = serde_json::from_str(r#"{ "inWatchlist": true }"#).unwrap();
        assert!(status.in_watchlist);
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ErrorBody::message_from(r#"{ "message": "Movie with slug x not found." }"#),
            "Movie with slug x not found."
        );
        assert_eq!(
            ErrorBody::message_from(r#"{ "error": "Search query cannot be null or empty." }"#),
            "Search query cannot be null or empty."
        );
        assert_eq!(ErrorBody::message_from("Bad Gateway\n"), "Bad Gateway");
    }
}
