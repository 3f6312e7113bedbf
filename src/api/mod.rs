//! HTTP client for the volume API.
//!
//! Thin wrapper over reqwest: joins versioned paths onto the configured
//! target, attaches the bearer token, and maps non-success statuses to
//! errors carrying the response body verbatim. 204 is a success here — it
//! signals an empty result and is interpreted by the callers.

pub mod codec;

use std::io::Write;
use std::time::Duration;

use futures::StreamExt;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::AppConfig;
use crate::error::{Result, VolumectlError};

/// Version prefix of every endpoint this client talks to.
pub const API_VERSION: &str = "1.4";

#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    target: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_target(&config.target, config.token.clone())
    }

    pub fn with_target(target: &str, token: Option<String>) -> Result<Self> {
        if target.is_empty() {
            return Err(VolumectlError::Config(
                "API target is required. Set VOLUMECTL_TARGET or run with a configured target."
                    .to_string(),
            ));
        }

        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            http,
            target: target.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}{}", self.target, API_VERSION, path)
    }

    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Response> {
        let mut request = self.http.request(Method::GET, self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await
    }

    pub async fn post_form(&self, path: &str, form: &[(String, String)]) -> Result<Response> {
        let request = self.http.request(Method::POST, self.url(path)).form(form);
        self.send(request).await
    }

    pub async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<Response> {
        let mut request = self.http.request(Method::DELETE, self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        };

        let response = request.send().await?;
        tracing::debug!(status = %response.status(), url = %response.url(), "API response");

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VolumectlError::UnexpectedStatus { status, body });
        }

        Ok(response)
    }
}

/// Relays a response body to `out` chunk by chunk. Bind-style endpoints can
/// emit a multi-line progress stream rather than a single JSON document, so
/// chunks are flushed as they arrive.
pub async fn stream_to<W: Write>(response: Response, out: &mut W) -> Result<()> {
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        out.write_all(&chunk)?;
        out.flush()?;
    }
    Ok(())
}
