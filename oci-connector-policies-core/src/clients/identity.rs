//! Identity service: compartment listing with pagination.

use crate::clients::Page;
use crate::oci::rest::{query_string, OciRestClient};
use crate::oci::{endpoints, OciResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const API_VERSION: &str = "20160918";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compartment {
    pub id: String,
    pub name: String,
}

#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// One page of the compartments under a tenancy. `page` is the
    /// `opc-next-page` token from the previous call.
    async fn list_compartments(
        &self,
        tenancy_id: &str,
        page: Option<&str>,
    ) -> OciResult<Page<Compartment>>;
}

pub struct IdentityClient {
    rest: Arc<OciRestClient>,
    host: String,
}

impl IdentityClient {
    pub fn new(rest: Arc<OciRestClient>, region: &str) -> Self {
        Self {
            rest,
            host: endpoints::identity(region),
        }
    }
}

#[async_trait]
impl IdentityApi for IdentityClient {
    async fn list_compartments(
        &self,
        tenancy_id: &str,
        page: Option<&str>,
    ) -> OciResult<Page<Compartment>> {
        // The whole compartment tree, not just the first level.
        let mut params = vec![
            ("compartmentId", tenancy_id),
            ("compartmentIdInSubtree", "true"),
            ("accessLevel", "ANY"),
        ];
        if let Some(token) = page {
            params.push(("page", token));
        }
        let path = format!("/{API_VERSION}/compartments{}", query_string(&params));
        let (items, next_page) = self.rest.get_json_page(&self.host, &path).await?;
        Ok(Page { items, next_page })
    }
}
