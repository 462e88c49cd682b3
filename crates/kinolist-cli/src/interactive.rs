use std::io::Write;

use kinolist_api::MovieApi;
use kinolist_core::detail::DetailController;
use kinolist_core::error::KinolistError;
use kinolist_core::identity::UserIdentity;
use kinolist_core::navigation::Page;
use kinolist_core::screen::home::Home;
use kinolist_core::screen::search::Search;
use kinolist_core::screen::watchlist::Watchlist;
use kinolist_core::screen::{Action, Router, ScreenView};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

const LIST_HELP: &str = "Enter a number to open a movie, r to reload, q to quit.";
const DETAIL_HELP: &str = "t to toggle the watchlist, b to go back, q to quit.";

/// A page that lists movies and can open one of them.
pub(crate) trait Browse {
    fn heading(&self) -> String;
    fn view(&self) -> ScreenView<'_>;
    fn in_detail(&self) -> bool;
    fn detail_mut(&mut self) -> Option<&mut DetailController>;
    async fn reload<A: MovieApi>(&mut self, api: &A, user: &UserIdentity) -> Action;
    async fn select<A: MovieApi>(&mut self, api: &A, user: &UserIdentity, index: usize)
        -> Action;
    async fn back<A: MovieApi>(&mut self, api: &A, user: &UserIdentity) -> Action;
}

impl Browse for Home {
    fn heading(&self) -> String {
        "Movies of the Day".into()
    }

    fn view(&self) -> ScreenView<'_> {
        Home::view(self)
    }

    fn in_detail(&self) -> bool {
        self.detail().is_some()
    }

    fn detail_mut(&mut self) -> Option<&mut DetailController> {
        Home::detail_mut(self)
    }

    async fn reload<A: MovieApi>(&mut self, api: &A, _user: &UserIdentity) -> Action {
        self.load(api).await
    }

    async fn select<A: MovieApi>(
        &mut self,
        api: &A,
        user: &UserIdentity,
        index: usize,
    ) -> Action {
        Home::select(self, api, user, index).await
    }

    async fn back<A: MovieApi>(&mut self, _api: &A, _user: &UserIdentity) -> Action {
        Home::back(self)
    }
}

impl Browse for Search {
    fn heading(&self) -> String {
        format!("Results for \"{}\"", self.query())
    }

    fn view(&self) -> ScreenView<'_> {
        Search::view(self)
    }

    fn in_detail(&self) -> bool {
        self.detail().is_some()
    }

    fn detail_mut(&mut self) -> Option<&mut DetailController> {
        Search::detail_mut(self)
    }

    async fn reload<A: MovieApi>(&mut self, api: &A, _user: &UserIdentity) -> Action {
        let query = self.query().to_string();
        self.submit(api, &query).await
    }

    async fn select<A: MovieApi>(
        &mut self,
        api: &A,
        user: &UserIdentity,
        index: usize,
    ) -> Action {
        Search::select(self, api, user, index).await
    }

    async fn back<A: MovieApi>(&mut self, _api: &A, _user: &UserIdentity) -> Action {
        Search::back(self)
    }
}

impl Browse for Watchlist {
    fn heading(&self) -> String {
        "Your Watchlist".into()
    }

    fn view(&self) -> ScreenView<'_> {
        Watchlist::view(self)
    }

    fn in_detail(&self) -> bool {
        self.detail().is_some()
    }

    fn detail_mut(&mut self) -> Option<&mut DetailController> {
        Watchlist::detail_mut(self)
    }

    async fn reload<A: MovieApi>(&mut self, api: &A, user: &UserIdentity) -> Action {
        self.load(api, user).await
    }

    async fn select<A: MovieApi>(
        &mut self,
        api: &A,
        user: &UserIdentity,
        index: usize,
    ) -> Action {
        Watchlist::select(self, api, user, index).await
    }

    async fn back<A: MovieApi>(&mut self, api: &A, user: &UserIdentity) -> Action {
        Watchlist::back(self, api, user).await
    }
}

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Reload,
    /// Zero-based list index.
    Open(usize),
    Toggle,
    Back,
    Invalid,
}

impl Input {
    fn parse(line: &str, in_detail: bool) -> Self {
        match (line.trim(), in_detail) {
            ("q", _) => Self::Quit,
            ("b", true) => Self::Back,
            ("t", true) => Self::Toggle,
            ("r", false) => Self::Reload,
            (input, false) => match input.parse::<usize>() {
                Ok(n) if n > 0 => Self::Open(n - 1),
                _ => Self::Invalid,
            },
            _ => Self::Invalid,
        }
    }
}

/// Browse an already loaded screen: open entries, toggle them, go back.
///
/// `opened` is the action returned by the screen's first load. The session
/// ends when the router leaves the page it started on.
pub(crate) async fn browse<A: MovieApi, S: Browse>(
    api: &A,
    router: &mut Router,
    mut screen: S,
    opened: Action,
) -> Result<(), KinolistError> {
    let user = router.user().clone();
    let page = router.page();
    if !apply(router, page, opened) {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", render::screen(&screen.heading(), screen.view()));
        let in_detail = screen.in_detail();
        let help = if in_detail { DETAIL_HELP } else { LIST_HELP };
        print!("\n{help}\n> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let action = match Input::parse(&line, in_detail) {
            Input::Quit => break,
            Input::Reload => screen.reload(api, &user).await,
            Input::Open(index) => screen.select(api, &user, index).await,
            Input::Toggle => {
                if let Some(detail) = screen.detail_mut() {
                    detail.toggle(api).await;
                }
                Action::None
            }
            Input::Back => screen.back(api, &user).await,
            Input::Invalid => Action::SetStatus(help.to_string()),
        };

        if !apply(router, page, action) {
            break;
        }
        println!();
    }
    Ok(())
}

/// Apply an action; false once the router has left `page`.
fn apply(router: &mut Router, page: Page, action: Action) -> bool {
    if let Some(status) = router.apply(action) {
        println!("{status}");
    }
    if router.page() != page {
        println!("Redirected to {}", router.page().path());
        return false;
    }
    true
}
