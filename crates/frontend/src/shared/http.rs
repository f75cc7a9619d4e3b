//! JSON over HTTP against the pricing API.
//!
//! Non-2xx responses are turned into [`ApiError`] from the status and the
//! `detail` field of the body.

use super::api_utils::api_url;
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    log::warn!("{} -> HTTP {}", response.url(), status);
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("respuesta inválida: {}", e)))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path)).send().await.map_err(network)?;
    read_json(response).await
}

/// GET with a query string built from `query`
pub async fn get_json_with_query<T, Q>(path: &str, query: &Q) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::InvalidInput(format!("filtros inválidos: {}", e)))?;
    let url = if qs.is_empty() {
        api_url(path)
    } else {
        format!("{}?{}", api_url(path), qs)
    };
    let response = Request::get(&url).send().await.map_err(network)?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}
