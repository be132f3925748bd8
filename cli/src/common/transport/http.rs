//! # HTTP Transport
//!
//! File: cli/src/common/transport/http.rs
//!
//! ## Overview
//!
//! Sends each operation as `POST {endpoint}/{Operation}` with the request as
//! a JSON body, and decodes the JSON response.
//!
//! ## Wire Details
//!
//! - Header `X-Service-Region` carries the resolved region.
//! - A configured API key is sent as a bearer token.
//! - An empty success body decodes as `{}`.
//! - Non-2xx responses become `SvcError::Service`. The error body is read
//!   leniently: the code comes from `code` or `__type`, the message from
//!   `message` or `Message`; a body that is not JSON becomes the message.
//! - Connection failures whose source chain reports a failed host lookup
//!   become `SvcError::NameResolution`, naming the configured endpoint.
//!
use crate::common::transport::resolve::is_name_resolution_failure;
use crate::common::transport::Transport;
use crate::core::config::ServiceSettings;
use crate::core::error::{Result, SvcError};
use crate::engine::descriptor::OperationDescriptor;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

pub const REGION_HEADER: &str = "X-Service-Region";

const USER_AGENT: &str = concat!("svcctl/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    region: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(settings: &ServiceSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(SvcError::from)?;
        Ok(HttpTransport {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            region: settings.region.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    fn url(&self, operation: &str) -> String {
        format!("{}/{}", self.endpoint, operation)
    }

    fn map_send_error(&self, err: reqwest::Error) -> SvcError {
        if is_name_resolution_failure(&err) {
            SvcError::NameResolution {
                endpoint: self.endpoint.clone(),
                source: err,
            }
        } else {
            SvcError::Http { source: err }
        }
    }
}

/// Builds the service error for a non-2xx response.
fn service_error(operation: &str, status: u16, body: &str) -> SvcError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let field = |names: &[&str]| {
        parsed.as_ref().and_then(|v| {
            names
                .iter()
                .find_map(|n| v.get(*n).and_then(Value::as_str))
                .map(str::to_string)
        })
    };
    let code = field(&["code", "__type"])
        // `__type` may be namespaced as `prefix#Code`.
        .map(|c| c.rsplit('#').next().unwrap_or_default().to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let message = field(&["message", "Message"]).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            "no error details returned".to_string()
        } else {
            trimmed.to_string()
        }
    });
    SvcError::Service {
        operation: operation.to_string(),
        status,
        code,
        message,
    }
}

impl Transport for HttpTransport {
    #[instrument(name = "call", skip_all, fields(operation = descriptor.operation))]
    async fn call(&self, descriptor: &OperationDescriptor, request: &Map<String, Value>) -> Result<Value> {
        let url = self.url(descriptor.operation);
        debug!("POST {}", url);

        let mut builder = self
            .client
            .post(&url)
            .header(REGION_HEADER, &self.region)
            .json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(SvcError::from)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(service_error(descriptor.operation, status.as_u16(), &text).into());
        }
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Map::new()));
        }
        serde_json::from_slice(&body).map_err(|e| {
            SvcError::InvalidResponse {
                operation: descriptor.operation.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
