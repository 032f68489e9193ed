//! Shared protocol bindings, domain types, and errors.
//!
//! ## Submodules
//!
//! - [`proto`] - Generated prost messages and tonic client/server stubs.
//! - [`types`] - Domain records, the filter model, and validation rules.
//! - [`convert`] - Conversions between wire messages and domain records.
//! - [`error`] - The unified [`Error`] type and its gRPC status mapping.

pub mod convert;
pub mod error;
pub mod types;

pub use error::{Error, Result, ValidationError};

/// gRPC service and message definitions generated from
/// `proto/employee.proto`.
///
/// Parameterless RPCs (`GetAllEmployees`, `GetDepartments`) take
/// `google.protobuf.Empty`, which prost maps to `()`.
pub mod proto {
    tonic::include_proto!("employee");

    /// Encoded file descriptor set used to serve gRPC reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("employee_descriptor");
}
