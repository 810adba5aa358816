//! HTTP client for the test-selection service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shard_packer::{SelectionError, TestRecord, TestSelectionProvider};
use tracing::debug;

use super::types::ChangeList;

/// Default test-selection endpoint.
pub const DEFAULT_SELECTION_URL: &str = "https://tests-selection.azurewebsites.net/api";

/// Longest response body kept in error messages.
const MAX_ERROR_BODY: usize = 512;

/// Test-selection service client.
pub struct TestSelectionClient {
    client: Client,
    endpoint: String,
    change_list: ChangeList,
}

impl TestSelectionClient {
    /// Create a client that posts `change_list` to `endpoint`.
    pub fn new(
        endpoint: impl Into<String>,
        change_list: ChangeList,
    ) -> Result<Self, SelectionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| SelectionError::Http(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            change_list,
        })
    }

    /// Endpoint the change list is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TestSelectionProvider for TestSelectionClient {
    async fn fetch_tests(&self) -> Result<Vec<TestRecord>, SelectionError> {
        debug!(
            endpoint = %self.endpoint,
            files = self.change_list.file_list.len(),
            "Requesting test selection"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.change_list)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    SelectionError::Unavailable(format!("Cannot connect to {}", self.endpoint))
                } else {
                    SelectionError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            body.truncate(floor_char_boundary(&body, MAX_ERROR_BODY));
            return Err(SelectionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<TestRecord>>()
            .await
            .map_err(|e| SelectionError::Parse(e.to_string()))
    }

    fn source(&self) -> &str {
        "selection-service"
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|i| s.is_char_boundary(*i)).unwrap_or(0)
}
