//! HTTP client adapter for the deployer daemon.

use anyhow::{Context, Result};
use armada_common::{ActuatorPostRequest, AppStatus, DeploymentState};
use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;

use crate::application::ports::AppDeployer;

/// Client for the deployer daemon's REST API.
///
/// Pure pass-through: no retries and no timeouts of its own. Deadline and
/// cancellation policy belong to the caller's transport layer.
#[derive(Debug, Clone)]
pub struct DeployerClient {
    base_url: String,
    client: reqwest::Client,
}

impl DeployerClient {
    /// Build a client against `base_url` (scheme + authority, with or
    /// without a trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("building deployer HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn instance_actuator_url(&self, app_id: &str, instance_id: &str) -> String {
        let app_id = utf8_percent_encode(app_id, NON_ALPHANUMERIC);
        let instance_id = utf8_percent_encode(instance_id, NON_ALPHANUMERIC);
        format!(
            "{}/apps/{app_id}/instances/{instance_id}/actuator",
            self.base_url
        )
    }
}

#[async_trait]
impl AppDeployer for DeployerClient {
    async fn app_status(&self, app_id: &str) -> Result<Option<AppStatus>> {
        let encoded = utf8_percent_encode(app_id, NON_ALPHANUMERIC);
        let url = format!("{}/apps/{encoded}/status", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("fetching app status from {url}"))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status: AppStatus = response
            .error_for_status()
            .with_context(|| format!("deployer rejected status query for app '{app_id}'"))?
            .json()
            .await
            .with_context(|| format!("decoding status snapshot for app '{app_id}'"))?;

        // Older daemons report a missing app as an Unknown-state snapshot
        // instead of a 404. Collapse both signals into None here so the
        // sentinel never crosses the port boundary.
        if status.state == DeploymentState::Unknown {
            return Ok(None);
        }
        Ok(Some(status))
    }

    async fn actuator_get(
        &self,
        app_id: &str,
        instance_id: &str,
        endpoint: &str,
    ) -> Result<String> {
        let encoded = utf8_percent_encode(endpoint, NON_ALPHANUMERIC);
        let url = format!(
            "{}?endpoint={encoded}",
            self.instance_actuator_url(app_id, instance_id)
        );

        self.client
            .get(&url)
            .send()
            .await
            .with_context(|| {
                format!("reading actuator endpoint '{endpoint}' on instance '{instance_id}'")
            })?
            .error_for_status()
            .with_context(|| {
                format!("instance '{instance_id}' rejected actuator read '{endpoint}'")
            })?
            .text()
            .await
            .context("reading actuator response body")
    }

    async fn actuator_post(
        &self,
        app_id: &str,
        instance_id: &str,
        request: &ActuatorPostRequest,
    ) -> Result<()> {
        let url = self.instance_actuator_url(app_id, instance_id);

        self.client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| {
                format!(
                    "forwarding actuator write '{}' to instance '{instance_id}'",
                    request.endpoint
                )
            })?
            .error_for_status()
            .with_context(|| {
                format!(
                    "instance '{instance_id}' rejected actuator write '{}'",
                    request.endpoint
                )
            })?;
        Ok(())
    }
}
