//! REST helpers for the auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; components decide whether a
//! failure becomes an alert or only a log line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::Value;

use super::types::{EmailRequest, LoginRequest, SignupRequest, VerifyOtpRequest};
use crate::config;
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/api/login";
pub const SIGNUP_PATH: &str = "/api/signup";
pub const GOOGLE_PATH: &str = "/api/google";
pub const VERIFY_PATH: &str = "/api/verify";
pub const RESEND_OTP_PATH: &str = "/api/resendOTP";
pub const FORGOT_PASSWORD_PATH: &str = "/api/forgotpassword";

fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Decode a response body; an empty body is `null`.
fn parse_body(raw: &str) -> Result<Value, ApiError> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST `body` as JSON to `path` and return the decoded response.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the request cannot be sent,
/// [`ApiError::Status`] on a non-2xx answer, and [`ApiError::Decode`] for a
/// body that is not JSON.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn post_json<B: Serialize>(path: &'static str, body: &B) -> Result<Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint_url(config::api_base(), path);
        log::debug!("POST {url}");
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { endpoint: path, status: resp.status() });
        }
        let raw = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        parse_body(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("POST {} skipped outside the browser", endpoint_url(config::api_base(), path));
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`post_json`].
pub async fn login(request: &LoginRequest) -> Result<Value, ApiError> {
    post_json(LOGIN_PATH, request).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn signup(request: &SignupRequest) -> Result<Value, ApiError> {
    post_json(SIGNUP_PATH, request).await
}

/// Start the Google sign-in flow.
///
/// # Errors
///
/// See [`post_json`].
pub async fn google_login() -> Result<Value, ApiError> {
    post_json(GOOGLE_PATH, &serde_json::json!({})).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<Value, ApiError> {
    post_json(VERIFY_PATH, request).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn resend_otp(request: &EmailRequest) -> Result<Value, ApiError> {
    post_json(RESEND_OTP_PATH, request).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn forgot_password(request: &EmailRequest) -> Result<Value, ApiError> {
    post_json(FORGOT_PASSWORD_PATH, request).await
}
