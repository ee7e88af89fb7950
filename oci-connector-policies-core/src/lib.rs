//! Core library for the OCI service connector policy generator:
//! - compartment enumeration (paginated, whole tenancy)
//! - per-compartment resource listing with per-service failure isolation
//! - deterministic policy statement generation from fixed templates
//!

pub mod clients;
mod commands;
mod enumeration;
mod error;
mod generation;
mod inventory;
mod lister;
pub mod oci;

// Re-exports for a small, focused public API
pub use commands::{ConnectorPolicyService, ScanReport};
pub use enumeration::list_all_compartments;
pub use error::{ConnectorPolicyError, ConnectorPolicyResult};
pub use generation::{emission_order, generate_policies, Role, STATEMENT_SEPARATOR};
pub use inventory::{ResourceInventory, ResourceKind};
pub use lister::{CompartmentListing, ListFailure, ResourceLister};
pub use oci::config::{OciConfig, DEFAULT_PROFILE};
pub use oci::{OciError, OciResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_generation_smoke_test() {
        let inventory = ResourceInventory {
            buckets: vec!["audit".to_string()],
            ..ResourceInventory::default()
        };
        let statements = generate_policies(
            "ocid1.compartment.oc1..work",
            &inventory,
            "ocid1.compartment.oc1..connectors",
        );
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("target.bucket.name='audit'"));
        assert!(statements[0].contains("request.principal.type='serviceconnector'"));
    }
}
