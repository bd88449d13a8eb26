//! Thin HTTP client shared by the public site and the back office.
//!
//! Every call goes to `config::api_url`, carries the session bearer token
//! when one exists, and unwraps the `{ status, data, message }` envelope.
//! A rejected request never escapes as a panic or an unhandled future —
//! callers get a `Result` and decide what to show. Nothing here retries,
//! caches, or cancels; a component unmounting mid-request simply drops the
//! eventual message on a dead scope.

mod error;

pub use error::ApiError;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::api::ApiResponse;

use crate::config;
use crate::forms::Payload;
use crate::session;

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::load() {
        Some(s) => builder.header("Authorization", &format!("Bearer {}", s.token)),
        None => builder,
    }
}

/// GET an envelope-wrapped payload.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = config::api_url(path);
    let request = authorize(Request::get(&url))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    log_failure(path, decode(response).await)
}

/// POST a JSON body and decode the envelope's data.
pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = config::api_url(path);
    let request = authorize(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    log_failure(path, decode(response).await)
}

/// POST a JSON body where only the envelope's `status` matters.
pub async fn post_ok<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = config::api_url(path);
    let request = authorize(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    log_failure(path, decode_ok(response).await)
}

/// DELETE a resource by path (`{resource}/{id}`).
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = config::api_url(path);
    let request = authorize(Request::delete(&url))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    log_failure(path, decode_ok(response).await)
}

/// Sends a draft payload to a create or update endpoint. A payload with a
/// file part goes out as multipart form data with array fields flattened
/// into indexed keys; everything else is a plain JSON body.
pub async fn send_payload(path: &str, payload: Payload) -> Result<(), ApiError> {
    match payload {
        Payload::Json(body) => post_ok(path, &body).await,
        Payload::Multipart { fields, files } => {
            let form = web_sys::FormData::new()
                .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
            for (key, value) in &fields {
                form.append_with_str(key, value)
                    .map_err(|_| ApiError::Network(format!("could not append field {key}")))?;
            }
            for (key, file) in &files {
                form.append_with_blob_and_filename(key, file, &file.name())
                    .map_err(|_| ApiError::Network(format!("could not append file {key}")))?;
            }
            let url = config::api_url(path);
            let request = authorize(Request::post(&url))
                .body(form)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            log_failure(path, decode_ok(response).await)
        }
    }
}

/// Envelope-first decoding: a readable envelope wins even on a non-2xx
/// response, the HTTP code only matters when no envelope came back.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    match response.json::<ApiResponse<T>>().await {
        Ok(envelope) => envelope.into_data().map_err(ApiError::Rejected),
        Err(_) if !response.ok() => Err(ApiError::Http(response.status())),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

async fn decode_ok(response: Response) -> Result<(), ApiError> {
    match response.json::<ApiResponse<serde_json::Value>>().await {
        Ok(envelope) if envelope.status => Ok(()),
        Ok(envelope) => Err(ApiError::Rejected(envelope.message.unwrap_or_else(|| {
            "Request rejected by server".to_string()
        }))),
        Err(_) if !response.ok() => Err(ApiError::Http(response.status())),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

fn log_failure<T>(path: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        gloo_console::error!("API request failed:", path.to_string(), err.to_string());
    }
    result
}
