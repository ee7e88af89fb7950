//! OCI REST integration: config file loading, API-key request signing,
//! signed HTTP calls, regional endpoints.

pub mod config;
pub mod endpoints;
pub(crate) mod rest;
pub(crate) mod signer;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OciError {
    #[error("OCI configuration error: {0}")]
    ConfigError(String),
    #[error("request signing error: {0}")]
    SigningError(String),
    #[error("request error: {0}")]
    RequestError(String),
    #[error("service returned {status}: {message}")]
    ServiceError { status: u16, message: String },
    #[error("response decoding error: {0}")]
    DecodeError(String),
}

pub type OciResult<T> = Result<T, OciError>;
