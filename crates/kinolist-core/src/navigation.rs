//! Pages and the access guard in front of them.

use std::fmt;

use crate::identity::UserIdentity;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Search,
    Watchlist,
}

impl Page {
    pub const ALL: &[Page] = &[Self::Home, Self::Search, Self::Watchlist];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Search => "/search",
            Self::Watchlist => "/watchlist",
        }
    }

    /// Pages that need a signed-in user.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Search | Self::Watchlist)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Search => write!(f, "Search"),
            Self::Watchlist => write!(f, "Watchlist"),
        }
    }
}

/// Outcome of asking to enter a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allow(Page),
    Redirect(Page),
}

impl Navigation {
    /// The page that actually ends up displayed.
    pub fn page(self) -> Page {
        match self {
            Self::Allow(p) | Self::Redirect(p) => p,
        }
    }
}

/// Gate entry to `page`. Protected pages send anonymous users home.
pub fn guard(page: Page, user: &UserIdentity) -> Navigation {
    if page.is_protected() && !user.is_authenticated() {
        tracing::debug!(page = %page, "not signed in, redirecting home");
        Navigation::Redirect(Page::Home)
    } else {
        Navigation::Allow(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_redirected_from_protected_pages() {
        let anon = UserIdentity::Anonymous;
        assert_eq!(guard(Page::Watchlist, &anon), Navigation::Redirect(Page::Home));
        assert_eq!(guard(Page::Search, &anon), Navigation::Redirect(Page::Home));
        assert_eq!(guard(Page::Home, &anon), Navigation::Allow(Page::Home));
    }

    #[test]
    fn test_sentinel_user_redirected() {
        let user = UserIdentity::from_raw(Some("Unauthorized"));
        assert_eq!(guard(Page::Watchlist, &user).page(), Page::Home);
    }

    #[test]
    fn test_authenticated_passes() {
        let alice = UserIdentity::from_raw(Some("alice"));
        for page in Page::ALL {
            assert_eq!(guard(*page, &alice), Navigation::Allow(*page));
        }
    }
}
