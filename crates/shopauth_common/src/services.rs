// --- File: crates/shopauth_common/src/services.rs ---
//! Collaborator abstractions for the platform SDK.
//!
//! The OAuth handshake, webhook subscription and billing calls all belong to
//! the vendor SDK. The auth routes only orchestrate them, so each one is a
//! trait here and the host application injects its implementation.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use shopauth_config::BillingConfig;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{CallbackError, SdkError};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Query parameters of an OAuth request, as sent by the platform.
pub type AuthQuery = HashMap<String, String>;

/// Authenticated context for a shop, as returned by the callback validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// e.g. `my-shop.myshopify.com`
    pub shop: String,
    /// Comma separated scopes the merchant granted.
    pub scope: String,
    pub access_token: String,
    #[serde(default)]
    pub is_online: bool,
}

/// Where to send the merchant to start OAuth, plus any cookies the SDK wants set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeginAuth {
    pub auth_url: String,
    /// Full `Set-Cookie` header values.
    pub set_cookies: Vec<String>,
}

/// Outcome of registering a single webhook topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResult {
    pub success: bool,
    /// Raw platform response; on failure it carries `errors[].message`.
    #[serde(default)]
    pub result: serde_json::Value,
}

/// Registration outcome per webhook topic.
pub type RegisterReturn = HashMap<String, RegisterResult>;

/// The OAuth half of the platform SDK.
pub trait OAuthSdk: Send + Sync {
    /// Start the OAuth handshake for `shop`, returning the authorize URL.
    fn begin_auth(
        &self,
        shop: &str,
        callback_path: &str,
        is_online: bool,
    ) -> BoxFuture<'_, BeginAuth, SdkError>;

    /// Validate the callback request and exchange the code for a session.
    fn validate_auth_callback(
        &self,
        headers: &HeaderMap,
        query: &AuthQuery,
    ) -> BoxFuture<'_, Session, CallbackError>;
}

/// Registers every webhook handler the app declared for a shop.
pub trait WebhookRegistry: Send + Sync {
    fn register_all(&self, shop: &str, access_token: &str) -> BoxFuture<'_, RegisterReturn, SdkError>;
}

/// Checks for an active payment and, when there is none, creates a charge.
pub trait BillingService: Send + Sync {
    /// Returns `(has_active_payment, confirmation_url)`. The URL is empty when
    /// a payment is already active.
    fn ensure_billing(
        &self,
        session: &Session,
        billing: &BillingConfig,
    ) -> BoxFuture<'_, (bool, String), SdkError>;
}

/// Shop to granted-scope mapping kept across callbacks.
pub trait ShopScopeStore: Send + Sync {
    fn get(&self, shop: &str) -> BoxFuture<'_, Option<String>, SdkError>;

    /// Last write wins.
    fn put(&self, shop: &str, scope: &str) -> BoxFuture<'_, (), SdkError>;
}

/// The collaborators the auth routes need, bundled for injection.
#[derive(Clone)]
pub struct AuthServices {
    pub sdk: Arc<dyn OAuthSdk>,
    pub webhooks: Arc<dyn WebhookRegistry>,
    pub billing: Arc<dyn BillingService>,
    pub shops: Arc<dyn ShopScopeStore>,
}
