//! Queue admin service: queue listing.

use crate::oci::rest::{query_string, OciRestClient};
use crate::oci::{endpoints, OciResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const API_VERSION: &str = "20210201";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSummary {
    pub id: String,
}

/// List response wrapper; queue listing nests the items under `items`.
#[derive(Debug, Deserialize)]
struct QueueCollection {
    items: Vec<QueueSummary>,
}

#[async_trait]
pub trait QueueApi: Send + Sync {
    async fn list_queues(&self, compartment_id: &str) -> OciResult<Vec<QueueSummary>>;
}

pub struct QueueClient {
    rest: Arc<OciRestClient>,
    host: String,
}

impl QueueClient {
    pub fn new(rest: Arc<OciRestClient>, region: &str) -> Self {
        Self {
            rest,
            host: endpoints::queue(region),
        }
    }
}

#[async_trait]
impl QueueApi for QueueClient {
    async fn list_queues(&self, compartment_id: &str) -> OciResult<Vec<QueueSummary>> {
        let path = format!(
            "/{API_VERSION}/queues{}",
            query_string(&[("compartmentId", compartment_id)])
        );
        let collection: QueueCollection = self.rest.get_json(&self.host, &path).await?;
        Ok(collection.items)
    }
}
