use super::BackendError;
use std::time::Duration;

pub(super) fn build_client(timeout: Duration) -> Result<reqwest::Client, BackendError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| BackendError::Unavailable(format!("failed to build HTTP client: {}", e)))
}

/// Send a request once and return the body of a successful response
pub(super) async fn send_once(
    request: reqwest::RequestBuilder,
    timeout: Duration,
) -> Result<String, BackendError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            BackendError::Timeout(timeout)
        } else if e.is_connect() {
            BackendError::Unavailable(e.to_string())
        } else {
            BackendError::Http(e.to_string())
        }
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| BackendError::Http(format!("failed to read response body: {}", e)))?;

    if !status.is_success() {
        return Err(BackendError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
