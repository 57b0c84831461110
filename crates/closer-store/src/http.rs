//! Shared HTTP response helpers for the REST store.

use crate::error::StoreError;

/// Check an HTTP response for a non-success status.
///
/// PostgREST reports constraint violations and unknown columns as 4xx with a
/// JSON body (`code`, `message`, `details`); the body is kept verbatim.
pub async fn check_response(
    table: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, StoreError> {
    if !resp.status().is_success() {
        return Err(StoreError::Api {
            table: table.to_string(),
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
