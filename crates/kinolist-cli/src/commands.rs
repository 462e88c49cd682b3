use kinolist_api::{MovieApi, MovieRecord};
use kinolist_core::config::AppConfig;
use kinolist_core::detail::{DetailController, ToggleOutcome, TOGGLE_FAILED};
use kinolist_core::error::KinolistError;
use kinolist_core::navigation::{Navigation, Page};
use kinolist_core::screen::home::Home;
use kinolist_core::screen::search::Search;
use kinolist_core::screen::watchlist::Watchlist;
use kinolist_core::screen::{Action, Router, ScreenView};
use kinolist_core::status::ToggleKind;
use tracing::info;

use crate::cli::{Cli, Command, ConfigAction};
use crate::interactive;
use crate::render;
use crate::session::Session;

const SIGN_IN_TO_TOGGLE: &str = "Sign in to manage your watchlist.";

pub async fn run(cli: &Cli, config: &AppConfig) -> Result<(), KinolistError> {
    if let Command::Config { action } = &cli.command {
        return config_command(action);
    }

    let session = Session::start(cli, config).await?;
    let api = &session.api;
    let mut router = Router::new(session.user.clone());

    match &cli.command {
        Command::Home { interactive } => home(api, &mut router, *interactive, cli.json).await,
        Command::Search { query, interactive } => {
            if let Navigation::Redirect(page) = router.navigate(Page::Search) {
                println!("Sign in to search. Redirected to {}", page.path());
                return home(api, &mut router, false, cli.json).await;
            }
            search(api, &mut router, &query.join(" "), *interactive, cli.json).await
        }
        Command::Watchlist { interactive } => {
            if let Navigation::Redirect(page) = router.navigate(Page::Watchlist) {
                println!("Sign in to see your watchlist. Redirected to {}", page.path());
                return home(api, &mut router, false, cli.json).await;
            }
            watchlist(api, &mut router, *interactive, cli.json).await
        }
        Command::Movie { slug } => {
            let detail = open_movie(api, &session, slug).await?;
            if cli.json {
                println!("{}", render::json(detail.movie()));
            } else {
                print!("{}", render::detail(&detail));
            }
            Ok(())
        }
        Command::Toggle { slug } => toggle(api, &session, slug).await,
        Command::Open { slug } => {
            let movie = api.movie(slug).await?;
            match movie.poster() {
                Some(url) => {
                    info!(slug, url, "Opening poster");
                    open::that(url)?;
                }
                None => println!("{} has no poster.", movie.title),
            }
            Ok(())
        }
        Command::Whoami => {
            println!("{}", session.user);
            Ok(())
        }
        Command::Config { .. } => Ok(()),
    }
}

fn config_command(action: &ConfigAction) -> Result<(), KinolistError> {
    let path = AppConfig::config_path();
    match action {
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init => {
            if AppConfig::init_at(&path)? {
                println!("Wrote {}", path.display());
            } else {
                println!("{} already exists", path.display());
            }
        }
    }
    Ok(())
}

async fn home<A: MovieApi>(
    api: &A,
    router: &mut Router,
    interactive: bool,
    json: bool,
) -> Result<(), KinolistError> {
    router.navigate(Page::Home);
    let mut screen = Home::new();
    let action = screen.load(api).await;
    if interactive {
        return interactive::browse(api, router, screen, action).await;
    }
    print_status(router.apply(action));
    print_screen("Movies of the Day", screen.view(), screen.movies(), json);
    Ok(())
}

async fn search<A: MovieApi>(
    api: &A,
    router: &mut Router,
    query: &str,
    interactive: bool,
    json: bool,
) -> Result<(), KinolistError> {
    let mut screen = Search::new();
    let action = screen.submit(api, query).await;
    if interactive {
        return interactive::browse(api, router, screen, action).await;
    }
    if let Action::SetStatus(msg) = action {
        eprintln!("{msg}");
    }
    let heading = format!("Results for \"{}\"", screen.query());
    print_screen(&heading, screen.view(), screen.results(), json);
    Ok(())
}

async fn watchlist<A: MovieApi>(
    api: &A,
    router: &mut Router,
    interactive: bool,
    json: bool,
) -> Result<(), KinolistError> {
    let user = router.user().clone();
    let mut screen = Watchlist::new();
    let action = screen.load(api, &user).await;
    if interactive {
        return interactive::browse(api, router, screen, action).await;
    }
    print_status(router.apply(action));
    if router.page() != Page::Watchlist {
        println!("Redirected to {}", router.page().path());
        return Ok(());
    }
    print_screen("Your Watchlist", screen.view(), screen.movies(), json);
    Ok(())
}

async fn open_movie<A: MovieApi>(
    api: &A,
    session: &Session,
    slug: &str,
) -> Result<DetailController, KinolistError> {
    let movie = api.movie(slug).await?;
    let mut detail = DetailController::new(movie, session.user.clone());
    detail.mount(api).await;
    Ok(detail)
}

async fn toggle<A: MovieApi>(api: &A, session: &Session, slug: &str) -> Result<(), KinolistError> {
    let mut detail = open_movie(api, session, slug).await?;
    let outcome = detail.toggle(api).await;
    println!("{}", toggle_report(&render::title_line(detail.movie()), outcome)?);
    Ok(())
}

/// What to tell the user after a toggle. Anything short of a confirmed
/// change is an error so the process exits non-zero.
fn toggle_report(title: &str, outcome: ToggleOutcome) -> Result<String, KinolistError> {
    match outcome {
        ToggleOutcome::Applied(ToggleKind::Added) => Ok(format!("Added {title} to your watchlist.")),
        ToggleOutcome::Applied(ToggleKind::Removed) => {
            Ok(format!("Removed {title} from your watchlist."))
        }
        ToggleOutcome::Ignored => Err(KinolistError::Watchlist(SIGN_IN_TO_TOGGLE.into())),
        ToggleOutcome::Failed => Err(KinolistError::Watchlist(TOGGLE_FAILED.into())),
    }
}

fn print_status(status: Option<String>) {
    if let Some(msg) = status {
        eprintln!("{msg}");
    }
}

fn print_screen(
    heading: &str,
    view: ScreenView<'_>,
    movies: &[MovieRecord],
    json: bool,
) {
    if json && matches!(view, ScreenView::List(_) | ScreenView::Empty(_)) {
        println!("{}", render::json(movies));
    } else {
        print!("{}", render::screen(heading, view));
    }
}
