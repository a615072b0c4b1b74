// --- File: crates/shopauth_common/src/http.rs ---
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::{internal_error, HttpStatusCode, ShopAuthError};

/// Plain-text error response: the status from `HttpStatusCode`, the body is the bare message.
impl IntoResponse for ShopAuthError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status_code, self.public_message()).into_response()
    }
}

/// Builds a `302 Found` redirect, the status browsers expect after an OAuth hop.
///
/// `set_cookies` are appended as separate `Set-Cookie` headers.
pub fn found<I, S>(location: &str, set_cookies: I) -> Result<Response, ShopAuthError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let location = HeaderValue::from_str(location)
        .map_err(|e| internal_error(format!("invalid redirect location: {e}")))?;

    let mut response = StatusCode::FOUND.into_response();
    let headers = response.headers_mut();
    headers.insert(header::LOCATION, location);
    for cookie in set_cookies {
        let value = HeaderValue::from_str(cookie.as_ref())
            .map_err(|e| internal_error(format!("invalid cookie header: {e}")))?;
        headers.append(header::SET_COOKIE, value);
    }
    Ok(response)
}

/// Collapses a handler result into a response.
pub fn handle_result(result: Result<Response, ShopAuthError>) -> Response {
    result.unwrap_or_else(IntoResponse::into_response)
}
