//! Crate-level error type.

use crate::oci::OciError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorPolicyError {
    #[error(transparent)]
    Oci(#[from] OciError),
}

pub type ConnectorPolicyResult<T> = Result<T, ConnectorPolicyError>;
