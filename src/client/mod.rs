use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};

use crate::domain::model::{CompareErrorBody, CompareRequest, CompareResponse};
use crate::domain::ports::ProductComparer;
use crate::utils::error::{CompareError, Result};

/// Client-side cap on a single compare exchange. A caller deadline passed to
/// [`CompareClient::compare_products_with_deadline`] composes with this; the
/// shorter of the two governs.
const COMPARE_TIMEOUT: Duration = Duration::from_secs(5);

/// Thin client for the compare microservice. Holds no mutable state; cloning
/// shares the underlying connection pool, and concurrent calls never
/// serialize each other.
#[derive(Debug, Clone)]
pub struct CompareClient {
    service_addr: String,
    http: Client,
}

impl CompareClient {
    /// `service_addr` is the `host:port` of the compare service. An empty
    /// address is not rejected here; each call fails fast with a config error
    /// so the client can be constructed before configuration is known good.
    pub fn new(service_addr: impl Into<String>) -> Self {
        Self {
            service_addr: service_addr.into(),
            http: Client::new(),
        }
    }

    /// Same exchange as [`ProductComparer::compare_products`], aborted with
    /// [`CompareError::Cancelled`] if `deadline` elapses first.
    pub async fn compare_products_with_deadline(
        &self,
        product_ids: &[String],
        deadline: Duration,
    ) -> Result<CompareResponse> {
        tokio::time::timeout(deadline, self.compare_products(product_ids)).await?
    }
}

#[async_trait::async_trait]
impl ProductComparer for CompareClient {
    /// Performs one POST to `http://<addr>/compare` and decodes the reply.
    /// Exactly one outbound request per call; no retries, no caching.
    async fn compare_products(&self, product_ids: &[String]) -> Result<CompareResponse> {
        if self.service_addr.is_empty() {
            return Err(CompareError::ConfigError);
        }

        let payload = CompareRequest {
            product_ids: product_ids.to_vec(),
        };
        let body = serde_json::to_vec(&payload).map_err(CompareError::SerializationError)?;

        let compare_url = Url::parse(&format!("http://{}/compare", self.service_addr))?;

        tracing::debug!("Sending compare request to: {}", compare_url);
        let response = self
            .http
            .post(compare_url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(COMPARE_TIMEOUT)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Compare response status: {}", status);

        // Read the whole body before branching on status; the error path
        // needs it too.
        let response_body = response.bytes().await?;

        if status != StatusCode::OK {
            if let Ok(remote) = serde_json::from_slice::<CompareErrorBody>(&response_body) {
                if !remote.error.is_empty() {
                    return Err(CompareError::RemoteError {
                        status: status.as_u16(),
                        message: Some(remote.error),
                    });
                }
            }
            return Err(CompareError::RemoteError {
                status: status.as_u16(),
                message: None,
            });
        }

        serde_json::from_slice(&response_body).map_err(CompareError::DecodeError)
    }
}
