//! In-memory storage for employee records and department names.
//!
//! - [`memory`] - The lock-guarded [`EmployeeStore`].
//! - [`seed`] - Records every seeded store starts with.

pub mod memory;
pub mod seed;

pub use memory::EmployeeStore;
