//! Registry Layer
//!
//! This module contains the in-memory keyed collections behind the HTTP
//! handlers: each registry owns its records, assigns IDs from an atomic
//! counter, and enforces the referential rules between departments and
//! employees.

pub mod department;
pub mod employee;
pub mod sort;

pub use department::DepartmentRegistry;
pub use employee::EmployeeRegistry;
pub use sort::SortKey;
