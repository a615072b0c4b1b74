// --- File: crates/shopauth_oauth/src/handlers.rs ---
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use shopauth_common::{found, handle_result, AuthQuery, AuthServices, ShopAuthError};
use shopauth_config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

use crate::logic::complete_callback;
use crate::redirect::redirect_to_auth;

// --- State for OAuth Handlers ---
#[derive(Clone)]
pub struct OAuthState {
    pub config: Arc<AppConfig>,
    pub services: AuthServices,
}

/// Starts the OAuth flow. All the work happens in `redirect_to_auth`.
#[axum::debug_handler]
pub async fn auth_handler(
    State(state): State<Arc<OAuthState>>,
    Query(query): Query<AuthQuery>,
) -> Response {
    redirect_to_auth(&query, &state.config, state.services.sdk.as_ref()).await
}

/// Where the platform sends the merchant after they approve the app.
#[axum::debug_handler]
pub async fn auth_callback_handler(
    State(state): State<Arc<OAuthState>>,
    headers: HeaderMap,
    Query(query): Query<AuthQuery>,
) -> Response {
    match complete_callback(&state.config, &state.services, &headers, &query).await {
        Ok(redirect_url) => {
            info!("OAuth completed, redirecting to {}", redirect_url);
            handle_result(found(&redirect_url, Vec::<String>::new()))
        }
        Err(err) => {
            warn!("OAuth callback failed: {}", err);
            if err.restarts_auth() {
                // The OAuth cookie most likely expired before the merchant approved the request
                return redirect_to_auth(&query, &state.config, state.services.sdk.as_ref()).await;
            }
            ShopAuthError::from(err).into_response()
        }
    }
}
