//! Functions management service: function listing.

use crate::oci::rest::{query_string, OciRestClient};
use crate::oci::{endpoints, OciResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const API_VERSION: &str = "20181201";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSummary {
    pub id: String,
}

#[async_trait]
pub trait FunctionsApi: Send + Sync {
    async fn list_functions(&self, compartment_id: &str) -> OciResult<Vec<FunctionSummary>>;
}

pub struct FunctionsClient {
    rest: Arc<OciRestClient>,
    host: String,
}

impl FunctionsClient {
    pub fn new(rest: Arc<OciRestClient>, region: &str) -> Self {
        Self {
            rest,
            host: endpoints::functions(region),
        }
    }
}

#[async_trait]
impl FunctionsApi for FunctionsClient {
    async fn list_functions(&self, compartment_id: &str) -> OciResult<Vec<FunctionSummary>> {
        let path = format!(
            "/{API_VERSION}/functions{}",
            query_string(&[("compartmentId", compartment_id)])
        );
        let (items, _) = self.rest.get_json_page(&self.host, &path).await?;
        Ok(items)
    }
}
