// --- File: crates/shopauth_oauth/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/api/auth",
    params(
        ("shop" = String, Query, description = "Shop domain, e.g. my-shop.myshopify.com"),
        ("host" = Option<String>, Query, description = "Base64 admin host, passed through when embedded"),
        ("embedded" = Option<String>, Query, description = "\"1\" when loaded inside the admin iframe")
    ),
    responses(
        (status = 302, description = "Redirect to the authorize page, or to /exitiframe when embedded"),
        (status = 500, description = "No shop provided, or the SDK failed to start OAuth", content_type = "text/plain")
    ),
    tag = "OAuth"
)]
fn doc_auth_handler() {}

#[utoipa::path(
    get,
    path = "/api/auth/callback",
    params(
        ("shop" = String, Query, description = "Shop domain"),
        ("host" = String, Query, description = "Base64 encoded admin path"),
        ("code" = String, Query, description = "Authorization code"),
        ("state" = String, Query, description = "OAuth state nonce"),
        ("hmac" = String, Query, description = "Request signature, checked by the SDK")
    ),
    responses(
        (status = 302, description = "Redirect to the app inside the admin, or to the charge confirmation page"),
        (status = 400, description = "Invalid OAuth callback", content_type = "text/plain"),
        (status = 500, description = "Any other failure", content_type = "text/plain")
    ),
    tag = "OAuth"
)]
fn doc_auth_callback_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_auth_handler, doc_auth_callback_handler),
    components(schemas(shopauth_config::BillingConfig, shopauth_config::BillingInterval)),
    tags((name = "OAuth", description = "App install and OAuth callback"))
)]
pub struct OAuthApiDoc;
