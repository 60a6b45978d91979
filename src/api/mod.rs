/// HTTP gateway to the remote REST backend.
///
/// This module wraps the backend's CRUD endpoints for products and blogs
/// using [`reqwest`]. Every call carries a fixed timeout; a hung request
/// surfaces as a normal [`GatewayError`] instead of leaving the UI stuck.
///
/// The gateway performs no retries and no caching. The caller decides how
/// to surface a failure, and the authoritative lists are always re-fetched
/// wholesale after a successful mutation.
pub mod blogs;
pub mod products;

use std::time::Duration;

/// Shared HTTP client for the Gloam backend.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the gateway layer. Transport failures and non-2xx
/// responses share this one class; neither is retried.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("backend error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },
}

impl Gateway {
    /// Create a gateway for the given base URL (no trailing slash).
    ///
    /// The timeout applies per call, covering connect through body read.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, GatewayError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse_response(response).await
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::check_status(response).await
    }

    async fn put_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::check_status(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`GatewayError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), GatewayError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let gateway = Gateway::new("https://example.test/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            gateway.url("/products/available"),
            "https://example.test/api/products/available"
        );
    }
}
