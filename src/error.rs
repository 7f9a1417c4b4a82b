// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Sentinel2Error {
    /// Requested field id is not in the static geometry table. Propagated to
    /// the caller, never retried.
    #[error("field {0} not found")]
    UnknownField(String),
}
