//! Generic HTTP request wrapper

use crate::error::{FmpError, Result};
use reqwest::{Client, Method, Response};
use std::collections::BTreeMap;

/// HTTP client with a base URL and per-instance default headers and query
/// parameters
///
/// Defaults are owned by each instance and created empty at construction;
/// per-call overrides win on key collision. Any non-success response status
/// becomes [`FmpError::Status`], carrying the status code and body.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    default_headers: BTreeMap<String, String>,
    default_params: BTreeMap<String, String>,
}

impl ApiClient {
    /// Create a client for the given base URL with empty defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: BTreeMap::new(),
            default_params: BTreeMap::new(),
        }
    }

    /// Add a header sent on every request
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter sent on every request
    pub fn with_default_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_params.insert(name.into(), value.into());
        self
    }

    /// Join the base URL and an endpoint path with exactly one separator
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Merge per-call overrides over instance defaults
    fn merge(defaults: &BTreeMap<String, String>, overrides: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut merged = defaults.clone();
        for (name, value) in overrides {
            merged.insert((*name).to_string(), (*value).to_string());
        }
        merged.into_iter().collect()
    }

    /// Issue a request against an endpoint path
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<Response> {
        let url = self.endpoint_url(endpoint);
        let mut request = self
            .http
            .request(method, &url)
            .query(&Self::merge(&self.default_params, params));

        for (name, value) in Self::merge(&self.default_headers, headers) {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FmpError::Status { status, body });
        }

        Ok(response)
    }

    /// GET an endpoint with per-call query parameters
    pub async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Response> {
        self.request(Method::GET, endpoint, &[], params).await
    }

    /// POST to an endpoint with per-call query parameters
    pub async fn post(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Response> {
        self.request(Method::POST, endpoint, &[], params).await
    }

    /// PUT to an endpoint with per-call query parameters
    pub async fn put(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Response> {
        self.request(Method::PUT, endpoint, &[], params).await
    }

    /// DELETE an endpoint with per-call query parameters
    pub async fn delete(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Response> {
        self.request(Method::DELETE, endpoint, &[], params).await
    }
}
