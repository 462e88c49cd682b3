//! Plain-text rendering of screens and movies.

use std::fmt::Write;

use kinolist_api::MovieRecord;
use kinolist_core::detail::{DetailController, ToggleControl};
use kinolist_core::screen::ScreenView;

pub fn title_line(movie: &MovieRecord) -> String {
    match movie.release_year() {
        Some(year) => format!("{} ({year})", movie.title),
        None => movie.title.clone(),
    }
}

pub fn movie_list(movies: &[MovieRecord]) -> String {
    let width = movies.len().to_string().len();
    movies
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{:>width$}. {}\n", i + 1, title_line(m)))
        .collect()
}

pub fn toggle_button(control: ToggleControl) -> Option<String> {
    match control {
        ToggleControl::Hidden => None,
        ToggleControl::Disabled => Some(format!("[{}] (checking...)", control.label())),
        ToggleControl::Ready { .. } => Some(format!("[{}]", control.label())),
    }
}

pub fn detail(detail: &DetailController) -> String {
    let movie = detail.movie();
    let mut out = String::new();
    let _ = writeln!(out, "{}", title_line(movie));
    if let Some(poster) = movie.poster() {
        let _ = writeln!(out, "Poster: {poster}");
    }
    if !movie.overview.trim().is_empty() {
        let _ = writeln!(out, "\n{}\n", movie.overview.trim());
    }
    if !movie.cast.trim().is_empty() {
        let _ = writeln!(out, "Starring: {}", movie.cast.trim());
    }
    if !movie.director.trim().is_empty() {
        let _ = writeln!(out, "Directed by: {}", movie.director.trim());
    }
    if let Some(button) = toggle_button(detail.control()) {
        let _ = writeln!(out, "{button}");
    }
    if let Some(err) = detail.error() {
        let _ = writeln!(out, "{err}");
    }
    out
}

pub fn screen(heading: &str, view: ScreenView<'_>) -> String {
    let body = match view {
        ScreenView::Loading => "Loading...\n".to_string(),
        ScreenView::Error(err) => format!("{err}\n"),
        ScreenView::Empty(msg) => format!("{msg}\n"),
        ScreenView::Detail(d) => return detail(d),
        ScreenView::List(movies) => movie_list(movies),
    };
    format!("{heading}\n\n{body}")
}

pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".into())
}

#[cfg(test)]
mod tests {
    use kinolist_core::identity::UserIdentity;

    use super::*;

    fn movie(slug: &str, title: &str, year: &str) -> MovieRecord {
        serde_json::from_value(serde_json::json!({
            "slug": slug,
            "title": title,
            "year": year,
            "overview": "A hacker learns the truth.",
            "regisseur": "The Wachowskis",
            "stars": "Keanu Reeves",
            "imgImdb": "https://img.example.org/matrix.jpg"
        }))
        .unwrap()
    }

    #[test]
    fn test_title_line_skips_unknown_year() {
        assert_eq!(title_line(&movie("m", "The Matrix", "1999")), "The Matrix (1999)");
        assert_eq!(title_line(&movie("m", "The Matrix", "0")), "The Matrix");
    }

    #[test]
    fn test_movie_list_numbers_entries() {
        let list = movie_list(&[
            movie("matrix", "The Matrix", "1999"),
            movie("inception", "Inception", "2010"),
        ]);
        assert_eq!(list, "1. The Matrix (1999)\n2. Inception (2010)\n");
    }

    #[test]
    fn test_anonymous_detail_has_no_button() {
        let detail = DetailController::new(movie("matrix", "The Matrix", "1999"), UserIdentity::Anonymous);
        let text = super::detail(&detail);
        assert!(text.contains("Directed by: The Wachowskis"));
        assert!(!text.contains("Watchlist"));
    }

    #[test]
    fn test_unresolved_detail_shows_disabled_button() {
        let detail = DetailController::new(
            movie("matrix", "The Matrix", "1999"),
            UserIdentity::from_raw(Some("alice")),
        );
        assert!(super::detail(&detail).contains("[Add to Watchlist] (checking...)"));
    }

    #[test]
    fn test_screen_messages() {
        assert_eq!(
            screen("Your Watchlist", ScreenView::Empty("Your watchlist is empty.")),
            "Your Watchlist\n\nYour watchlist is empty.\n"
        );
    }
}
