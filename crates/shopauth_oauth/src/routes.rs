// --- File: crates/shopauth_oauth/src/routes.rs ---

use crate::handlers::{auth_callback_handler, auth_handler, OAuthState};
use crate::redirect::{AUTH_PATH, CALLBACK_PATH};
use axum::{routing::get, Router};
use shopauth_common::AuthServices;
use shopauth_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing the two OAuth routes.
///
/// The router is already provided with its own state, so it merges into a
/// host router of any state type.
pub fn routes<S>(config: Arc<AppConfig>, services: AuthServices) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let oauth_state = Arc::new(OAuthState { config, services });

    Router::new()
        .route(AUTH_PATH, get(auth_handler))
        .route(CALLBACK_PATH, get(auth_callback_handler))
        .with_state(oauth_state)
}

/// Registers `GET /api/auth` and `GET /api/auth/callback` on the host app.
pub fn install_routes<S>(app: Router<S>, config: Arc<AppConfig>, services: AuthServices) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    app.merge(routes::<S>(config, services))
}
