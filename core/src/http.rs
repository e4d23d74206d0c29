//! HTTP transport types and the `Transport` seam.
//!
//! # Design
//! Requests and responses are plain data. `HeroClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network; a
//! `Transport` executes the round-trip in between. Non-2xx statuses are
//! returned as data, not errors, so status interpretation stays in the
//! client.

use async_trait::async_trait;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single HTTP round-trip.
///
/// Implementations return `Err` only when no response was obtained at all.
/// They must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a blocking `ureq` agent on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

fn execute_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let HttpRequest {
        method,
        path,
        headers,
        body,
    } = request;
    let body = body.unwrap_or_default();

    let result = match method {
        HttpMethod::Get => with_headers(agent.get(&path), &headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(&path), &headers).call(),
        HttpMethod::Post => with_headers(agent.post(&path), &headers).send(body.as_bytes()),
        HttpMethod::Put => with_headers(agent.put(&path), &headers).send(body.as_bytes()),
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
