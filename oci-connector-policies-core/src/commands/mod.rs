//! Commands module - service layer driving the scan pipeline.

mod scan;
mod service;

pub use scan::ScanReport;
pub use service::ConnectorPolicyService;
