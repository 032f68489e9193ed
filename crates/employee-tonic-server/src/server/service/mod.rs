//! gRPC service implementation and shutdown admission.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`EmployeeServiceImpl`).
//! - [`inflight`] - In-flight call accounting used to drain on shutdown.

pub mod handler;
pub mod inflight;
