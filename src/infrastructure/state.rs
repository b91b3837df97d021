//! Application state containing the registries shared across all handlers

use std::sync::Arc;

use crate::registry::{DepartmentRegistry, EmployeeRegistry};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Department registry
    pub departments: Arc<DepartmentRegistry>,
    /// Employee registry
    pub employees: Arc<EmployeeRegistry>,
}

impl AppState {
    /// Create a new AppState with both registries wired together.
    ///
    /// The registries are mutually dependent (employee creation validates
    /// the department reference, department removal cascades into the
    /// employees), so construction is two-phase: build both, then install
    /// the back-reference.
    pub fn new() -> Self {
        let departments = Arc::new(DepartmentRegistry::new());
        let employees = Arc::new(EmployeeRegistry::new(departments.clone()));
        departments.attach_employees(Arc::downgrade(&employees));

        Self {
            departments,
            employees,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
