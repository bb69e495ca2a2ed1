//! Client side error events
//!
//! Errors shown to the user are also written to the backend log so they can
//! be looked at later. Posting is fire-and-forget: a failed post only ends up
//! in the browser console.

use contracts::shared::logger::CreateLogRequest;
use gloo_net::http::Request;

use super::api_utils::api_url;
use super::error::ApiError;

pub async fn post_client_log(req: &CreateLogRequest) -> Result<(), ApiError> {
    let response = Request::post(&api_url("/api/logs"))
        .json(req)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_http(status, &body));
    }
    Ok(())
}

/// Report an error event. Never fails.
pub fn emit_error_event(category: &'static str, message: String) {
    log::error!("[{}] {}", category, message);

    let req = CreateLogRequest::client(category, message);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = post_client_log(&req).await {
            log::warn!("failed to send client log: {}", e);
        }
    });
}
