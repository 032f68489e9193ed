//! Error types for the employee registry service.
//!
//! This module defines the central [`Error`] enum, which captures every
//! reportable failure of a registry call. It implements `From<Error>` for
//! `tonic::Status` so handlers can propagate failures with `?` and clients
//! receive the matching status code and message.
//!
//! ## Error Cases
//! - `Validation`: A request field is out of range (age, salary, hiring
//!   year). Maps to `INVALID_ARGUMENT`.
//! - `NotFound`: No employee exists with the requested ID. Maps to
//!   `NOT_FOUND`.
//! - `IdSpaceExhausted`: The store has handed out every positive `i32` ID.
//!   Maps to `RESOURCE_EXHAUSTED`.
//! - `ServiceShutdown`: A request arrived while the service was shutting
//!   down. Maps to `UNAVAILABLE`.
//!
//! Status messages are part of the wire contract and match the `Display`
//! output of each variant verbatim.

use crate::types::EmployeeId;
use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// A request field that violates a business rule.
#[derive(Clone, Copy, thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Employee age must be between 18 and 60")]
    AgeOutOfRange,

    #[error("Employee salary must be greater than 0")]
    NonPositiveSalary,

    #[error("Hiring year must be between 1900 and 2100")]
    HiringYearOutOfRange,
}

/// Unified error type for the employee registry service.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The client supplied an out-of-range field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested employee does not exist.
    #[error("Employee with ID {id} not found")]
    NotFound { id: EmployeeId },

    /// The ID counter cannot advance any further.
    #[error("Employee ID space exhausted")]
    IdSpaceExhausted,

    /// The service is in the process of shutting down.
    #[error("Service is shutting down")]
    ServiceShutdown,
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(e) => Status::invalid_argument(e.to_string()),
            Error::NotFound { .. } => Status::not_found(err.to_string()),
            Error::IdSpaceExhausted => Status::resource_exhausted(err.to_string()),
            Error::ServiceShutdown => Status::unavailable(err.to_string()),
        }
    }
}
