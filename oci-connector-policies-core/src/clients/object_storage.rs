//! Object storage service: namespace lookup and bucket listing.
//!
//! Bucket listing needs the tenancy's object storage namespace first, so the
//! trait has two operations and the lister composes them.

use crate::oci::rest::{query_string, OciRestClient};
use crate::oci::{endpoints, OciResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSummary {
    pub name: String,
}

#[async_trait]
pub trait ObjectStorageApi: Send + Sync {
    async fn get_namespace(&self) -> OciResult<String>;
    async fn list_buckets(
        &self,
        namespace: &str,
        compartment_id: &str,
    ) -> OciResult<Vec<BucketSummary>>;
}

pub struct ObjectStorageClient {
    rest: Arc<OciRestClient>,
    host: String,
}

impl ObjectStorageClient {
    pub fn new(rest: Arc<OciRestClient>, region: &str) -> Self {
        Self {
            rest,
            host: endpoints::object_storage(region),
        }
    }
}

#[async_trait]
impl ObjectStorageApi for ObjectStorageClient {
    async fn get_namespace(&self) -> OciResult<String> {
        // The namespace endpoint returns a bare JSON string.
        self.rest.get_json(&self.host, "/n/").await
    }

    async fn list_buckets(
        &self,
        namespace: &str,
        compartment_id: &str,
    ) -> OciResult<Vec<BucketSummary>> {
        let path = format!(
            "/n/{namespace}/b{}",
            query_string(&[("compartmentId", compartment_id)])
        );
        let (items, _) = self.rest.get_json_page(&self.host, &path).await?;
        Ok(items)
    }
}
