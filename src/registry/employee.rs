//! Employee registry - owns employee records, validates department
//! references through the department registry.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::DashMap;

use crate::domain::RegistryError;
use crate::models::{Employee, NewEmployee};
use crate::registry::DepartmentRegistry;
use crate::registry::sort::{self, SortKey};

/// In-memory employee store.
pub struct EmployeeRegistry {
    employees: DashMap<i32, Employee>,
    counter: AtomicI32,
    departments: Arc<DepartmentRegistry>,
}

impl EmployeeRegistry {
    pub fn new(departments: Arc<DepartmentRegistry>) -> Self {
        Self {
            employees: DashMap::new(),
            counter: AtomicI32::new(0),
            departments,
        }
    }

    /// Creates an employee under the next ID after checking that the
    /// referenced department exists. On a failed check the allocation is
    /// rolled back, so the next successful create receives the ID this
    /// call would have assigned.
    pub fn create(&self, new: NewEmployee) -> Result<Employee, RegistryError> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.departments.contains(new.department_id) {
            self.counter.fetch_sub(1, Ordering::SeqCst);
            tracing::error!("department {} does not exist", new.department_id);
            return Err(RegistryError::DepartmentNotFound(new.department_id));
        }

        let employee = Employee {
            id,
            department_id: new.department_id,
            name: new.name,
            email: new.email,
            age: new.age,
        };
        self.employees.insert(id, employee.clone());
        tracing::debug!("employee {} was created", id);
        Ok(employee)
    }

    pub fn get(&self, id: i32) -> Result<Employee, RegistryError> {
        match self.employees.get(&id) {
            Some(employee) => {
                tracing::debug!("employee {} details were fetched", id);
                Ok(employee.value().clone())
            }
            None => {
                tracing::error!("employee {} does not exist", id);
                Err(RegistryError::EmployeeNotFound(id))
            }
        }
    }

    /// Returns all employees; with an empty attribute in map-iteration
    /// order, otherwise sorted by the named attribute.
    pub fn list_all(&self, attribute: &str) -> Result<Vec<Employee>, RegistryError> {
        if attribute.is_empty() {
            return Ok(self
                .employees
                .iter()
                .map(|entry| entry.value().clone())
                .collect());
        }
        self.sort_by(attribute)
    }

    /// Linear scan for the employees of one department. Department
    /// existence is the caller's concern; an unknown ID yields an empty
    /// list.
    pub fn list_by_department(&self, department_id: i32) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|entry| entry.value().department_id == department_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Updates an employee. The department reference in the patch is
    /// checked against the department registry, but only the name is
    /// written; the stored department assignment is immutable through
    /// this call.
    pub fn update(&self, id: i32, patch: NewEmployee) -> Result<Employee, RegistryError> {
        if !self.employees.contains_key(&id) {
            tracing::error!("employee {} does not exist", id);
            return Err(RegistryError::EmployeeNotFound(id));
        }
        if !self.departments.contains(patch.department_id) {
            tracing::error!("department {} does not exist", patch.department_id);
            return Err(RegistryError::DepartmentNotFound(patch.department_id));
        }

        let mut employee = self
            .employees
            .get_mut(&id)
            .ok_or(RegistryError::EmployeeNotFound(id))?;
        employee.name = patch.name;
        tracing::debug!("employee {} was updated", id);
        Ok(employee.value().clone())
    }

    pub fn delete(&self, id: i32) -> Result<(), RegistryError> {
        match self.employees.remove(&id) {
            Some(_) => {
                tracing::debug!("employee {} was deleted", id);
                Ok(())
            }
            None => {
                tracing::error!("employee {} does not exist", id);
                Err(RegistryError::EmployeeNotFound(id))
            }
        }
    }

    /// Snapshots all employees and sorts them by the named attribute.
    pub fn sort_by(&self, attribute: &str) -> Result<Vec<Employee>, RegistryError> {
        let key = SortKey::parse(attribute)?;
        let mut snapshot: Vec<Employee> = self
            .employees
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        sort::sort_employees(&mut snapshot, key)?;
        Ok(snapshot)
    }
}
