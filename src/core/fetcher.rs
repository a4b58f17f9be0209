use crate::core::{ConfigProvider, Owner, OwnerSource};
use crate::utils::error::{PetReportError, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;

/// Fetches the full owner list from the configured HTTP endpoint in one GET.
pub struct ApiOwnerSource {
    endpoint: String,
    client: Client,
}

impl ApiOwnerSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| PetReportError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            endpoint: config.api_endpoint().to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_owners(&self) -> Result<Vec<Owner>> {
        // 沒有設定端點就不發送任何請求
        if self.endpoint.trim().is_empty() {
            return Err(PetReportError::ConfigError {
                message: "pet owner API endpoint is not configured".to_string(),
            });
        }

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(PetReportError::HttpStatusError {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let owners: Vec<Owner> =
            serde_json::from_str(&body).map_err(|source| PetReportError::DecodeError {
                url: self.endpoint.clone(),
                source,
            })?;

        tracing::debug!("Fetched {} pet owners", owners.len());
        Ok(owners)
    }

    fn transport_error(&self, source: reqwest::Error) -> PetReportError {
        if source.is_timeout() {
            PetReportError::TimeoutError {
                url: self.endpoint.clone(),
                source,
            }
        } else {
            PetReportError::TransportError {
                url: self.endpoint.clone(),
                source,
            }
        }
    }
}

#[async_trait::async_trait]
impl OwnerSource for ApiOwnerSource {
    async fn fetch_all(&self) -> Result<Vec<Owner>> {
        let result = self.request_owners().await;

        if let Err(e) = &result {
            tracing::error!(
                endpoint = %self.endpoint,
                error = %e,
                "❌ Error retrieving pet data from pet owner API"
            );
        }

        result
    }
}
