//! View state for the three pages and the router between them.
//!
//! Screens never touch the router directly: their async handlers return an
//! [`Action`] and the front end applies it through [`Router::apply`].

pub mod home;
pub mod search;
pub mod watchlist;

use kinolist_api::{MovieApi, MovieRecord};

use crate::detail::DetailController;
use crate::identity::UserIdentity;
use crate::navigation::{self, Navigation, Page};

/// Actions that a screen can request from the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No side-effect.
    None,
    /// Navigate to a different page.
    NavigateTo(Page),
    /// Update the status line.
    SetStatus(String),
}

/// What a screen wants rendered right now.
#[derive(Debug, Clone, Copy)]
pub enum ScreenView<'a> {
    Loading,
    Error(&'a str),
    /// Nothing to show; carries the page's empty message.
    Empty(&'static str),
    Detail(&'a DetailController),
    List(&'a [MovieRecord]),
}

/// Current page plus the identity every screen is rendered for.
#[derive(Debug, Clone, Default)]
pub struct Router {
    user: UserIdentity,
    page: Page,
}

impl Router {
    pub fn new(user: UserIdentity) -> Self {
        Self {
            user,
            page: Page::Home,
        }
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Enter `page`, subject to the access guard.
    pub fn navigate(&mut self, page: Page) -> Navigation {
        let nav = navigation::guard(page, &self.user);
        self.page = nav.page();
        nav
    }

    /// Apply a screen's action. Returns the status text to show, if any.
    pub fn apply(&mut self, action: Action) -> Option<String> {
        match action {
            Action::None => None,
            Action::NavigateTo(page) => {
                self.navigate(page);
                None
            }
            Action::SetStatus(msg) => Some(msg),
        }
    }
}

/// Open the detail view for `movie` and resolve its membership.
pub(crate) async fn open_detail<A: MovieApi>(
    api: &A,
    user: &UserIdentity,
    movie: MovieRecord,
) -> DetailController {
    tracing::debug!(slug = %movie.slug, "Opening movie detail");
    let mut detail = DetailController::new(movie, user.clone());
    detail.mount(api).await;
    detail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_guards_navigation() {
        let mut router = Router::new(UserIdentity::Anonymous);
        assert_eq!(router.navigate(Page::Watchlist), Navigation::Redirect(Page::Home));
        assert_eq!(router.page(), Page::Home);

        let mut router = Router::new(UserIdentity::from_raw(Some("alice")));
        router.navigate(Page::Search);
        assert_eq!(router.page(), Page::Search);
    }

    #[test]
    fn test_router_applies_actions() {
        let mut router = Router::new(UserIdentity::from_raw(Some("alice")));
        router.navigate(Page::Watchlist);

        assert_eq!(router.apply(Action::None), None);
        assert_eq!(router.apply(Action::SetStatus("hi".into())), Some("hi".into()));
        assert_eq!(router.apply(Action::NavigateTo(Page::Home)), None);
        assert_eq!(router.page(), Page::Home);
    }
}
