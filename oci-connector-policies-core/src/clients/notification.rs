//! Notifications control plane: topic listing.

use crate::oci::rest::{query_string, OciRestClient};
use crate::oci::{endpoints, OciResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const API_VERSION: &str = "20181201";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub topic_id: String,
}

#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn list_topics(&self, compartment_id: &str) -> OciResult<Vec<TopicSummary>>;
}

pub struct NotificationClient {
    rest: Arc<OciRestClient>,
    host: String,
}

impl NotificationClient {
    pub fn new(rest: Arc<OciRestClient>, region: &str) -> Self {
        Self {
            rest,
            host: endpoints::notification(region),
        }
    }
}

#[async_trait]
impl NotificationApi for NotificationClient {
    async fn list_topics(&self, compartment_id: &str) -> OciResult<Vec<TopicSummary>> {
        let path = format!(
            "/{API_VERSION}/topics{}",
            query_string(&[("compartmentId", compartment_id)])
        );
        let (items, _) = self.rest.get_json_page(&self.host, &path).await?;
        Ok(items)
    }
}
