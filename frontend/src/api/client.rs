//! Shared request plumbing for the API bindings: base URL, bearer header
//! injection and envelope decoding. The binding modules stay one call deep.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared::envelope::ApiResponse;

use crate::auth;
use crate::config::get_api_base_url;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("{message}")]
    Api { code: i32, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

fn url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match auth::stored_token() {
        Some(token) if !token.is_empty() => {
            builder.header("Authorization", &format!("Bearer {}", token))
        }
        _ => builder,
    }
}

fn take_data<T>(envelope: ApiResponse<T>) -> ApiResult<T> {
    if !envelope.is_success() {
        return Err(ApiError::Api {
            code: envelope.code,
            message: envelope.message,
        });
    }
    envelope.data.ok_or(ApiError::Api {
        code: envelope.code,
        message: "empty response payload".to_string(),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    take_data(response.json::<ApiResponse<T>>().await?)
}

pub async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = authorize(Request::get(&url(path))).send().await?;
    decode(response).await
}

pub async fn get_with_query<T: DeserializeOwned>(
    path: &str,
    pairs: Vec<(&'static str, String)>,
) -> ApiResult<T> {
    let request = authorize(
        Request::get(&url(path)).query(pairs.iter().map(|(key, value)| (*key, value.as_str()))),
    );
    let response = request.send().await?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = authorize(Request::post(&url(path))).json(body)?.send().await?;
    decode(response).await
}

/// POST with no body for endpoints whose envelope carries no data.
pub async fn post_unit(path: &str) -> ApiResult<()> {
    let response = authorize(Request::post(&url(path))).send().await?;
    let envelope = response.json::<ApiResponse<serde_json::Value>>().await?;
    if envelope.is_success() {
        Ok(())
    } else {
        Err(ApiError::Api {
            code: envelope.code,
            message: envelope.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_data_success() {
        let envelope = ApiResponse {
            code: 200,
            message: "ok".to_string(),
            data: Some("tok-9".to_string()),
        };
        assert_eq!(take_data(envelope).unwrap(), "tok-9");
    }

    #[test]
    fn test_take_data_error_code() {
        let envelope: ApiResponse<String> = ApiResponse {
            code: 2002,
            message: "out of stock".to_string(),
            data: None,
        };
        match take_data(envelope) {
            Err(ApiError::Api { code, message }) => {
                assert_eq!(code, 2002);
                assert_eq!(message, "out of stock");
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn test_take_data_missing_payload() {
        let envelope: ApiResponse<String> = ApiResponse {
            code: 200,
            message: "ok".to_string(),
            data: None,
        };
        assert!(take_data(envelope).is_err());
    }
}
