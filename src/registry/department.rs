//! Department registry - owns department records and their lifecycle.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::domain::RegistryError;
use crate::models::{Department, Employee};
use crate::registry::EmployeeRegistry;

/// In-memory department store.
///
/// Holds a back-reference to the employee registry so that removing a
/// department can cascade into its employees. The two registries are
/// mutually dependent, so the back-reference is installed after both
/// have been constructed.
pub struct DepartmentRegistry {
    departments: DashMap<i32, Department>,
    counter: AtomicI32,
    employees: OnceCell<Weak<EmployeeRegistry>>,
}

impl DepartmentRegistry {
    pub fn new() -> Self {
        Self {
            departments: DashMap::new(),
            counter: AtomicI32::new(0),
            employees: OnceCell::new(),
        }
    }

    /// Installs the back-reference to the employee registry. Wired once
    /// during state construction.
    pub fn attach_employees(&self, employees: Weak<EmployeeRegistry>) {
        let _ = self.employees.set(employees);
    }

    fn employees(&self) -> Option<Arc<EmployeeRegistry>> {
        self.employees.get().and_then(Weak::upgrade)
    }

    /// Creates a department under the next ID. Always succeeds.
    pub fn create(&self, name: String) -> Department {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let department = Department { id, name };
        self.departments.insert(id, department.clone());
        tracing::debug!("department {} was created", id);
        department
    }

    pub fn get(&self, id: i32) -> Result<Department, RegistryError> {
        match self.departments.get(&id) {
            Some(department) => {
                tracing::debug!("department {} details were fetched", id);
                Ok(department.value().clone())
            }
            None => {
                tracing::error!("department {} was not found", id);
                Err(RegistryError::DepartmentNotFound(id))
            }
        }
    }

    /// Returns all departments in map-iteration order. The order is not
    /// guaranteed stable across calls under concurrent mutation.
    pub fn list(&self) -> Vec<Department> {
        self.departments
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.departments.contains_key(&id)
    }

    /// Replaces the department's name in place and returns the updated
    /// record.
    pub fn update(&self, id: i32, name: String) -> Result<Department, RegistryError> {
        match self.departments.get_mut(&id) {
            Some(mut department) => {
                department.name = name;
                tracing::debug!("department {} was updated", id);
                Ok(department.value().clone())
            }
            None => {
                tracing::error!("department {} was not found", id);
                Err(RegistryError::DepartmentNotFound(id))
            }
        }
    }

    /// Removes a department, deleting every employee that references it
    /// first. An employee that disappears between the scan and its delete
    /// is logged and skipped; the cascade keeps going.
    pub fn remove(&self, id: i32) -> Result<(), RegistryError> {
        if !self.contains(id) {
            tracing::error!("department {} was not found", id);
            return Err(RegistryError::DepartmentNotFound(id));
        }

        if let Some(employees) = self.employees() {
            for employee in employees.list_by_department(id) {
                if let Err(err) = employees.delete(employee.id) {
                    tracing::warn!(
                        "cascade delete skipped employee {}: {}",
                        employee.id,
                        err
                    );
                }
            }
        }

        self.departments.remove(&id);
        tracing::debug!("department {} was deleted", id);
        Ok(())
    }

    /// Lists the employees of an existing department.
    pub fn employees_of(&self, id: i32) -> Result<Vec<Employee>, RegistryError> {
        if !self.contains(id) {
            tracing::error!("department {} was not found", id);
            return Err(RegistryError::DepartmentNotFound(id));
        }
        let employees = self
            .employees()
            .map(|registry| registry.list_by_department(id))
            .unwrap_or_default();
        tracing::debug!("employees of department {} were fetched", id);
        Ok(employees)
    }
}

impl Default for DepartmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
