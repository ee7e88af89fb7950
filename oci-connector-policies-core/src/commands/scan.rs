//! Scan logic: enumerate compartments, list resources, generate statements.

use crate::enumeration::list_all_compartments;
use crate::error::ConnectorPolicyResult;
use crate::generation::generate_policies;

/// Outcome of a tenancy scan.
#[derive(Debug)]
pub struct ScanReport {
    /// Every generated statement, concatenated in compartment-enumeration
    /// order; within a compartment, in template-table order.
    pub statements: Vec<String>,
    /// Number of compartments enumerated.
    pub compartments: usize,
    /// Number of per-service listings that failed and were degraded to
    /// "no resources of that kind".
    pub suppressed_failures: usize,
}

impl super::service::ConnectorPolicyService {
    /// Scan the whole tenancy and generate the connector policy statements.
    ///
    /// Compartment enumeration errors are fatal. Per-service listing
    /// failures never abort the scan: the affected kind degrades to empty
    /// and the failure is logged at `warn` and counted in the report.
    pub async fn scan(&self, connector_compartment_id: &str) -> ConnectorPolicyResult<ScanReport> {
        let compartments = list_all_compartments(self.identity.as_ref(), &self.tenancy_id).await?;
        log::info!(
            "scanning {} compartments in tenancy {}",
            compartments.len(),
            self.tenancy_id
        );

        let mut statements = Vec::new();
        let mut suppressed_failures = 0;
        for compartment in &compartments {
            let listing = self.lister.list_compartment(&compartment.id).await;
            for failure in &listing.failures {
                log::warn!(
                    "listing {} in compartment {} ({}) failed, treating as empty: {}",
                    failure.kind,
                    compartment.name,
                    compartment.id,
                    failure.error
                );
            }
            suppressed_failures += listing.failures.len();
            statements.extend(generate_policies(
                &compartment.id,
                &listing.inventory,
                connector_compartment_id,
            ));
        }

        Ok(ScanReport {
            statements,
            compartments: compartments.len(),
            suppressed_failures,
        })
    }
}
