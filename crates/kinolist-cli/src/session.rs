use kinolist_api::{MovieApi, MovieClient};
use kinolist_core::config::AppConfig;
use kinolist_core::error::KinolistError;
use kinolist_core::identity::UserIdentity;
use tracing::{debug, warn};

use crate::cli::Cli;

/// Everything a command needs: the client and who it acts for.
pub struct Session {
    pub api: MovieClient,
    pub user: UserIdentity,
}

impl Session {
    /// Build the client from config and flags, then settle the identity.
    pub async fn start(cli: &Cli, config: &AppConfig) -> Result<Self, KinolistError> {
        let endpoint = config.endpoint(cli.base_url.as_deref(), cli.cookie.clone())?;
        debug!(base_url = %endpoint.base_url, "Using API endpoint");
        let api = MovieClient::new(endpoint)?;
        let user = resolve_identity(&api, cli.user.as_deref(), &config.session.user).await;
        debug!(user = %user, "Session identity");
        Ok(Self { api, user })
    }
}

/// Flag, then config, then whatever the server says the session belongs to.
async fn resolve_identity<A: MovieApi>(api: &A, flag: Option<&str>, configured: &str) -> UserIdentity {
    if let Some(raw) = flag {
        return UserIdentity::from_raw(Some(raw));
    }
    if !configured.trim().is_empty() {
        return UserIdentity::from_raw(Some(configured));
    }
    match api.current_user().await {
        Ok(raw) => UserIdentity::from_raw(raw.as_deref()),
        Err(e) => {
            warn!(error = %e, "Could not determine the signed-in user");
            UserIdentity::Anonymous
        }
    }
}
