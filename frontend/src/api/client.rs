use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::{ApiError, ErrorEnvelope},
    config,
};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let raw = self.execute(request).await?;
        decode_response(raw)
    }

    /// For writes: any 2xx is success. The echoed record is handed back when it
    /// decodes, `None` otherwise.
    pub(crate) async fn send_created<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let raw = self.execute(request).await?;
        if !is_success(raw.status) {
            return Err(decode_error(raw));
        }
        match decode_response(raw) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                log::debug!("write succeeded with an unrecognised body: {}", err);
                Ok(None)
            }
        }
    }

    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let raw = self.execute(request).await?;
        if is_success(raw.status) {
            Ok(())
        } else {
            Err(decode_error(raw))
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(responder) = mock_registry::find_mock(request.url().as_str()) {
                let mock = responder.respond(&request)?;
                return Ok(RawResponse {
                    status: mock.status,
                    body: mock.body.to_string(),
                });
            }
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(RawResponse { status, body })
    }
}

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn decode_response<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ApiError> {
    if !is_success(raw.status) {
        return Err(decode_error(raw));
    }
    let value = if raw.body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str::<Value>(&raw.body)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))?
    };
    serde_json::from_value(unwrap_envelope(value))
        .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
}

fn decode_error(raw: RawResponse) -> ApiError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(&raw.body).unwrap_or_default();
    ApiError::from_envelope(raw.status, envelope)
}

/// Strips the `{data: ...}` success envelope; bare payloads pass through.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};
