//! Status handling for Gemini responses.
//!
//! Gemini wraps failures in `{"error": {"code", "message", "status"}}`. The
//! `message` is surfaced when present, otherwise the raw body. A 429 carries
//! `Retry-After` only sometimes; without it the caller is told to wait 60 s.

use serde::Deserialize;

use crate::error::GenerationError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pass a successful response through, map everything else to a
/// [`GenerationError`].
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GenerationError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GenerationError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    Err(GenerationError::Api {
        status: status.as_u16(),
        message: error_message(body),
    })
}

fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorEnvelope>(&body).map_or(body, |e| e.error.message)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
