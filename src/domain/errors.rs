//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No department exists for the given ID
    DepartmentNotFound(i32),
    /// No employee exists for the given ID
    EmployeeNotFound(i32),
    /// Sorted listing requested with an attribute other than "age" or "name"
    UnknownSortAttribute(String),
    /// Age sort requested while the given employee has no age set
    MissingAge(i32),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DepartmentNotFound(id) => write!(f, "Department {} not found", id),
            RegistryError::EmployeeNotFound(id) => write!(f, "Employee {} not found", id),
            RegistryError::UnknownSortAttribute(attribute) => {
                write!(f, "Unknown sort attribute: {}", attribute)
            }
            RegistryError::MissingAge(id) => {
                write!(f, "Employee {} has no age to sort on", id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
