//! Connector policy service: holds the client handles and drives the
//! enumerate → list → generate pipeline. Adapters (the CLI today) sit on
//! top of this struct; tests construct it with mock clients.

use crate::clients::{
    FunctionsClient, IdentityApi, IdentityClient, LoggingClient, NotificationClient,
    ObjectStorageClient, QueueClient, StreamingClient,
};
use crate::error::ConnectorPolicyResult;
use crate::lister::ResourceLister;
use crate::oci::config::OciConfig;
use crate::oci::rest::OciRestClient;
use crate::oci::signer::ApiKeySigner;
use std::sync::Arc;

pub struct ConnectorPolicyService {
    pub(crate) identity: Arc<dyn IdentityApi>,
    pub(crate) lister: ResourceLister,
    pub(crate) tenancy_id: String,
}

impl ConnectorPolicyService {
    /// Build the service from an OCI config profile: loads the signing key,
    /// creates one shared REST client, and wires up the per-service clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the signing key cannot be loaded. Config and key
    /// problems are fatal; nothing can be listed without credentials.
    pub fn from_config(config: &OciConfig) -> ConnectorPolicyResult<Self> {
        let signer = ApiKeySigner::from_pem_file(&config.key_file, config.key_id())?;
        let rest = Arc::new(OciRestClient::new(signer));
        let region = config.region.as_str();

        let lister = ResourceLister::new(
            Arc::new(FunctionsClient::new(Arc::clone(&rest), region)),
            Arc::new(LoggingClient::new(Arc::clone(&rest), region)),
            Arc::new(NotificationClient::new(Arc::clone(&rest), region)),
            Arc::new(ObjectStorageClient::new(Arc::clone(&rest), region)),
            Arc::new(QueueClient::new(Arc::clone(&rest), region)),
            Arc::new(StreamingClient::new(Arc::clone(&rest), region)),
        );

        Ok(Self {
            identity: Arc::new(IdentityClient::new(rest, region)),
            lister,
            tenancy_id: config.tenancy.clone(),
        })
    }

    /// Assemble the service from already-built pieces. This is the seam the
    /// integration tests use to substitute mock clients.
    pub fn new(identity: Arc<dyn IdentityApi>, lister: ResourceLister, tenancy_id: String) -> Self {
        Self {
            identity,
            lister,
            tenancy_id,
        }
    }

    // scan() implementation is in scan.rs
}
