#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::json;
use shopauth_common::{
    AuthQuery, AuthServices, BeginAuth, BillingService, BoxFuture, CallbackError, OAuthSdk,
    RegisterResult, RegisterReturn, SdkError, Session, ShopScopeStore, WebhookRegistry,
};
use shopauth_config::{AppConfig, BillingConfig, ShopifyConfig};
use shopauth_oauth::{install_routes, InMemoryShopScopeStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const API_KEY: &str = "abc123";
pub const SHOP: &str = "my-shop.myshopify.com";
/// base64("my-shop.example.com/admin")
pub const HOST: &str = "bXktc2hvcC5leGFtcGxlLmNvbS9hZG1pbg==";
pub const APP_URL: &str = "https://my-shop.example.com/admin/apps/abc123";
pub const CONFIRMATION_URL: &str = "https://my-shop.myshopify.com/admin/charges/1/confirm";
pub const STATE_COOKIE: &str = "shopify_app_state=nonce; Path=/api/auth/callback; HttpOnly";

pub fn session(scope: &str) -> Session {
    Session {
        id: format!("offline_{}", SHOP),
        shop: SHOP.to_string(),
        scope: scope.to_string(),
        access_token: "shpat_test".to_string(),
        is_online: false,
    }
}

pub fn config(billing_required: bool) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        shopify: ShopifyConfig {
            api_key: API_KEY.to_string(),
            api_secret_key: "shpss_test".to_string(),
            host_name: "app.example.com".to_string(),
            scopes: vec!["write_products".to_string()],
            use_online_tokens: false,
        },
        billing: BillingConfig {
            required: billing_required,
            ..BillingConfig::default()
        },
    })
}

// --- Fake collaborators ---

pub struct FakeSdk {
    pub outcome: Mutex<Result<Session, CallbackError>>,
    pub begin_calls: Mutex<Vec<(String, String, bool)>>,
}

impl FakeSdk {
    pub fn returning(outcome: Result<Session, CallbackError>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(outcome),
            begin_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_outcome(&self, outcome: Result<Session, CallbackError>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn begin_count(&self) -> usize {
        self.begin_calls.lock().unwrap().len()
    }
}

impl OAuthSdk for FakeSdk {
    fn begin_auth(
        &self,
        shop: &str,
        callback_path: &str,
        is_online: bool,
    ) -> BoxFuture<'_, BeginAuth, SdkError> {
        self.begin_calls
            .lock()
            .unwrap()
            .push((shop.to_string(), callback_path.to_string(), is_online));
        let auth_url = format!("https://{}/admin/oauth/authorize?client_id={}", shop, API_KEY);
        Box::pin(async move {
            Ok(BeginAuth {
                auth_url,
                set_cookies: vec![STATE_COOKIE.to_string()],
            })
        })
    }

    fn validate_auth_callback(
        &self,
        _headers: &HeaderMap,
        _query: &AuthQuery,
    ) -> BoxFuture<'_, Session, CallbackError> {
        let outcome = self.outcome.lock().unwrap().clone();
        Box::pin(async move { outcome })
    }
}

pub struct FakeWebhooks {
    pub responses: Result<RegisterReturn, SdkError>,
    pub calls: AtomicUsize,
}

impl FakeWebhooks {
    pub fn all_ok() -> Arc<Self> {
        let mut responses = RegisterReturn::new();
        responses.insert(
            "APP_UNINSTALLED".to_string(),
            RegisterResult {
                success: true,
                result: json!({}),
            },
        );
        Self::with(Ok(responses))
    }

    pub fn with(responses: Result<RegisterReturn, SdkError>) -> Arc<Self> {
        Arc::new(Self {
            responses,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WebhookRegistry for FakeWebhooks {
    fn register_all(&self, _shop: &str, _access_token: &str) -> BoxFuture<'_, RegisterReturn, SdkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let responses = self.responses.clone();
        Box::pin(async move { responses })
    }
}

pub struct FakeBilling {
    pub answer: Result<(bool, String), SdkError>,
    pub calls: AtomicUsize,
}

impl FakeBilling {
    pub fn answering(answer: Result<(bool, String), SdkError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unpaid() -> Arc<Self> {
        Self::answering(Ok((false, CONFIRMATION_URL.to_string())))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BillingService for FakeBilling {
    fn ensure_billing(
        &self,
        _session: &Session,
        _billing: &BillingConfig,
    ) -> BoxFuture<'_, (bool, String), SdkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let answer = self.answer.clone();
        Box::pin(async move { answer })
    }
}

/// A scope store whose writes always fail.
pub struct FailingShopStore {
    pub message: String,
}

impl ShopScopeStore for FailingShopStore {
    fn get(&self, _shop: &str) -> BoxFuture<'_, Option<String>, SdkError> {
        Box::pin(async { Ok(None) })
    }

    fn put(&self, _shop: &str, _scope: &str) -> BoxFuture<'_, (), SdkError> {
        let err = SdkError::Other(self.message.clone());
        Box::pin(async move { Err(err) })
    }
}

// --- App wiring ---

pub struct TestApp {
    pub router: Router,
    pub sdk: Arc<FakeSdk>,
    pub billing: Arc<FakeBilling>,
    pub shops: Arc<InMemoryShopScopeStore>,
}

pub fn test_app(
    config: Arc<AppConfig>,
    sdk: Arc<FakeSdk>,
    webhooks: Arc<FakeWebhooks>,
    billing: Arc<FakeBilling>,
) -> TestApp {
    let shops = Arc::new(InMemoryShopScopeStore::new());
    let router = router_with_store(config, sdk.clone(), webhooks, billing.clone(), shops.clone());

    TestApp {
        router,
        sdk,
        billing,
        shops,
    }
}

/// Mounts the auth routes on a host router with an arbitrary scope store.
pub fn router_with_store(
    config: Arc<AppConfig>,
    sdk: Arc<FakeSdk>,
    webhooks: Arc<FakeWebhooks>,
    billing: Arc<FakeBilling>,
    shops: Arc<dyn ShopScopeStore>,
) -> Router {
    let services = AuthServices {
        sdk,
        webhooks,
        billing,
        shops,
    };
    let host_app = Router::new().route("/", axum::routing::get(|| async { "host app" }));
    install_routes(host_app, config, services)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> &str {
        self.headers
            .get(axum::http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

pub fn callback_uri() -> String {
    format!(
        "/api/auth/callback?shop={}&host={}&code=auth-code&state=nonce&hmac=abc",
        SHOP,
        urlencode(HOST)
    )
}

pub fn urlencode(value: &str) -> String {
    serde_urlencoded::to_string([("v", value)]).unwrap()[2..].to_string()
}
