//! Logging management service: log group listing.

use crate::oci::rest::{query_string, OciRestClient};
use crate::oci::{endpoints, OciResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const API_VERSION: &str = "20200531";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGroupSummary {
    pub id: String,
}

#[async_trait]
pub trait LoggingApi: Send + Sync {
    async fn list_log_groups(&self, compartment_id: &str) -> OciResult<Vec<LogGroupSummary>>;
}

pub struct LoggingClient {
    rest: Arc<OciRestClient>,
    host: String,
}

impl LoggingClient {
    pub fn new(rest: Arc<OciRestClient>, region: &str) -> Self {
        Self {
            rest,
            host: endpoints::logging(region),
        }
    }
}

#[async_trait]
impl LoggingApi for LoggingClient {
    async fn list_log_groups(&self, compartment_id: &str) -> OciResult<Vec<LogGroupSummary>> {
        let path = format!(
            "/{API_VERSION}/logGroups{}",
            query_string(&[("compartmentId", compartment_id)])
        );
        let (items, _) = self.rest.get_json_page(&self.host, &path).await?;
        Ok(items)
    }
}
