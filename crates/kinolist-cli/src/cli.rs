use clap::{Parser, Subcommand};

/// Browse the movie catalog and manage your watchlist.
#[derive(Debug, Parser)]
#[command(name = "kinolist", version, about)]
pub struct Cli {
    /// API base URL, overriding the configured deployment.
    #[arg(long, global = true, env = "KINOLIST_API_URL")]
    pub base_url: Option<String>,

    /// Account id to act as. Defaults to the config, then the server session.
    #[arg(long, short, global = true, env = "KINOLIST_USER")]
    pub user: Option<String>,

    /// Session cookie to send, e.g. "JSESSIONID=...".
    #[arg(long, global = true, env = "KINOLIST_COOKIE")]
    pub cookie: Option<String>,

    /// Print movies as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Movies of the day.
    Home {
        /// Browse interactively: open movies, toggle them, go back.
        #[arg(long, short)]
        interactive: bool,
    },
    /// Search the catalog (requires sign-in).
    Search {
        /// Search terms.
        query: Vec<String>,
        /// Browse the results interactively.
        #[arg(long, short)]
        interactive: bool,
    },
    /// Show one movie and whether it is in your watchlist.
    Movie {
        slug: String,
    },
    /// Add a movie to, or remove it from, your watchlist.
    Toggle {
        slug: String,
    },
    /// Your watchlist (requires sign-in).
    Watchlist {
        /// Browse interactively: open entries, toggle them, go back.
        #[arg(long, short)]
        interactive: bool,
    },
    /// Open a movie's poster in the browser.
    Open {
        slug: String,
    },
    /// Show who the client is acting as.
    Whoami,
    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the config file location.
    Path,
    /// Write the default config file if none exists.
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_terms() {
        let cli = Cli::parse_from(["kinolist", "--user", "alice", "search", "the", "best"]);
        assert_eq!(cli.user.as_deref(), Some("alice"));
        let Command::Search { query, interactive } = cli.command else {
            panic!("expected search");
        };
        assert_eq!(query.join(" "), "the best");
        assert!(!interactive);
    }

    #[test]
    fn test_parse_interactive_home() {
        let cli = Cli::parse_from(["kinolist", "home", "--interactive"]);
        assert!(matches!(cli.command, Command::Home { interactive: true }));
    }

    #[test]
    fn test_parse_interactive_watchlist() {
        let cli = Cli::parse_from(["kinolist", "watchlist", "-i", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Watchlist { interactive: true }));
    }
}
