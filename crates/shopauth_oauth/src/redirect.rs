//! Sending a merchant into the OAuth flow.
//!
//! Inside the admin iframe the platform's cookies are third-party, so an
//! embedded request is first bounced through `/exitiframe`, which reloads the
//! top window at `/api/auth`. Outside the iframe the SDK builds the authorize
//! URL directly.

use axum::response::{IntoResponse, Response};
use once_cell::sync::Lazy;
use regex::Regex;
use shopauth_common::{
    external_service_error, found, handle_result, internal_error, AuthQuery, OAuthSdk,
    ShopAuthError,
};
use shopauth_config::AppConfig;
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const AUTH_PATH: &str = "/api/auth";
pub const CALLBACK_PATH: &str = "/api/auth/callback";
pub const EXIT_IFRAME_PATH: &str = "/exitiframe";

static SHOP_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9\-_]*\.(myshopify\.com|myshopify\.io)$").expect("shop domain regex is valid")
});

/// Returns the shop domain if it looks like `<name>.myshopify.com` (or `.myshopify.io`).
pub fn sanitize_shop(shop: &str) -> Option<String> {
    let shop = shop.trim().trim_end_matches('/');
    SHOP_DOMAIN.is_match(shop).then(|| shop.to_ascii_lowercase())
}

/// Starts (or restarts) OAuth for the shop named in the query.
///
/// Never fails: problems become a plain-text 500, matching what the merchant
/// would see from the SDK itself.
pub async fn redirect_to_auth(query: &AuthQuery, config: &AppConfig, sdk: &dyn OAuthSdk) -> Response {
    let Some(shop) = query.get("shop").and_then(|s| sanitize_shop(s)) else {
        warn!("auth requested without a valid shop: {:?}", query.get("shop"));
        return ShopAuthError::MissingShop.into_response();
    };

    if query.get("embedded").map(String::as_str) == Some("1") {
        return handle_result(client_side_redirect(&shop, query, config));
    }

    handle_result(server_side_redirect(&shop, config, sdk).await)
}

fn client_side_redirect(shop: &str, query: &AuthQuery, config: &AppConfig) -> Result<Response, ShopAuthError> {
    let mut redirect_params = vec![("shop", shop)];
    if let Some(host) = query.get("host") {
        redirect_params.push(("host", host.as_str()));
    }
    let redirect_params = serde_urlencoded::to_string(&redirect_params).map_err(internal_error)?;
    let redirect_uri = format!("https://{}{}?{}", config.shopify.host_name, AUTH_PATH, redirect_params);

    // Keep whatever else the platform sent (host, hmac, ...) for the exit-iframe page
    let mut params: BTreeMap<&str, &str> = query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    params.insert("shop", shop);
    params.insert("redirectUri", &redirect_uri);
    let params = serde_urlencoded::to_string(&params).map_err(internal_error)?;

    debug!("leaving the admin iframe for {}", shop);
    found(&format!("{}?{}", EXIT_IFRAME_PATH, params), Vec::<String>::new())
}

async fn server_side_redirect(shop: &str, config: &AppConfig, sdk: &dyn OAuthSdk) -> Result<Response, ShopAuthError> {
    let begin = sdk
        .begin_auth(shop, CALLBACK_PATH, config.shopify.use_online_tokens)
        .await
        .map_err(|e| external_service_error("OAuth", e))?;

    debug!("redirecting {} to the authorize page", shop);
    found(&begin.auth_url, &begin.set_cookies)
}
