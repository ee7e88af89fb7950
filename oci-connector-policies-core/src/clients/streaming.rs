//! Streaming admin service: stream listing.

use crate::oci::rest::{query_string, OciRestClient};
use crate::oci::{endpoints, OciResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const API_VERSION: &str = "20180418";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSummary {
    pub id: String,
}

#[async_trait]
pub trait StreamingApi: Send + Sync {
    async fn list_streams(&self, compartment_id: &str) -> OciResult<Vec<StreamSummary>>;
}

pub struct StreamingClient {
    rest: Arc<OciRestClient>,
    host: String,
}

impl StreamingClient {
    pub fn new(rest: Arc<OciRestClient>, region: &str) -> Self {
        Self {
            rest,
            host: endpoints::streaming(region),
        }
    }
}

#[async_trait]
impl StreamingApi for StreamingClient {
    async fn list_streams(&self, compartment_id: &str) -> OciResult<Vec<StreamSummary>> {
        let path = format!(
            "/{API_VERSION}/streams{}",
            query_string(&[("compartmentId", compartment_id)])
        );
        let (items, _) = self.rest.get_json_page(&self.host, &path).await?;
        Ok(items)
    }
}
