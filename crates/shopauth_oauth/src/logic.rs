// --- File: crates/shopauth_oauth/src/logic.rs ---
use axum::http::HeaderMap;
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use shopauth_common::{AuthQuery, AuthServices, RegisterReturn};
use shopauth_config::AppConfig;
use tracing::{debug, info, warn};

use crate::error::AuthFlowError;

/// Mandatory privacy webhook topics. The platform rejects registering them
/// through the API (they are set in the partner dashboard), so their failures
/// are expected.
pub const GDPR_TOPICS: [&str; 3] = ["CUSTOMERS_DATA_REQUEST", "CUSTOMERS_REDACT", "SHOP_REDACT"];

// The platform sends `host` padded or not, and older links use the URL-safe alphabet.
const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

pub fn is_gdpr_topic(topic: &str) -> bool {
    GDPR_TOPICS.contains(&topic)
}

/// Topics whose registration failed and that are worth a warning, with the
/// platform's error message. Sorted by topic.
pub fn failed_registrations(responses: &RegisterReturn) -> Vec<(String, String)> {
    let mut failed: Vec<(String, String)> = responses
        .iter()
        .filter(|(topic, response)| !response.success && !is_gdpr_topic(topic))
        .map(|(topic, response)| {
            let message = response
                .result
                .pointer("/errors/0/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| response.result.to_string());
            (topic.clone(), message)
        })
        .collect();
    failed.sort();
    failed
}

/// Decodes the `host` query parameter into the admin path, e.g. `my-shop.example.com/admin`.
///
/// ASCII whitespace anywhere in the value is skipped. Any other symbol outside
/// the base64 alphabets is an error.
pub fn decode_admin_path(host: &str) -> Result<String, AuthFlowError> {
    let host: String = host.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD_LENIENT
        .decode(&host)
        .or_else(|_| URL_SAFE_LENIENT.decode(&host))
        .map_err(|e| AuthFlowError::Host(format!("host is not valid base64: {e}")))?;
    String::from_utf8(bytes).map_err(|_| AuthFlowError::Host("host is not valid UTF-8".to_string()))
}

/// The embedded app's URL inside the merchant admin: `https://<adminPath>/apps/<apiKey>`.
pub fn app_redirect_url(host: Option<&str>, api_key: &str) -> Result<String, AuthFlowError> {
    let host = host.ok_or_else(|| AuthFlowError::Host("missing host query parameter".to_string()))?;
    let admin_path = decode_admin_path(host)?;
    Ok(format!("https://{}/apps/{}", admin_path, api_key))
}

/// Runs the post-approval pipeline and returns the URL to send the merchant to.
///
/// Steps run strictly in order: validate, record scope, register webhooks,
/// build the admin URL, then (optionally) ensure billing.
pub async fn complete_callback(
    config: &AppConfig,
    services: &AuthServices,
    headers: &HeaderMap,
    query: &AuthQuery,
) -> Result<String, AuthFlowError> {
    let session = services.sdk.validate_auth_callback(headers, query).await?;
    debug!("OAuth callback validated for {}", session.shop);

    services
        .shops
        .put(&session.shop, &session.scope)
        .await
        .map_err(AuthFlowError::Store)?;

    let responses = services
        .webhooks
        .register_all(&session.shop, &session.access_token)
        .await
        .map_err(AuthFlowError::Webhooks)?;

    for (topic, message) in failed_registrations(&responses) {
        warn!("Failed to register {} webhook: {}", topic, message);
    }

    let mut redirect_url =
        app_redirect_url(query.get("host").map(String::as_str), &config.shopify.api_key)?;

    if config.billing.required {
        let (has_payment, confirmation_url) = services
            .billing
            .ensure_billing(&session, &config.billing)
            .await
            .map_err(AuthFlowError::Billing)?;

        if !has_payment {
            info!("{} has no active payment, sending to charge confirmation", session.shop);
            redirect_url = confirmation_url;
        }
    }

    Ok(redirect_url)
}
