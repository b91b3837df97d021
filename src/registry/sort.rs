//! Sort keys for employee listings.

use crate::domain::RegistryError;
use crate::models::Employee;

/// Employee attributes that support sorted listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Age,
    Name,
}

impl SortKey {
    pub fn parse(attribute: &str) -> Result<Self, RegistryError> {
        match attribute {
            "age" => Ok(SortKey::Age),
            "name" => Ok(SortKey::Name),
            other => Err(RegistryError::UnknownSortAttribute(other.to_string())),
        }
    }
}

/// Sorts a snapshot of employees in place, ascending.
///
/// An age sort requires every employee in the snapshot to carry an age;
/// a missing value is surfaced rather than silently skipped.
pub fn sort_employees(employees: &mut [Employee], key: SortKey) -> Result<(), RegistryError> {
    match key {
        SortKey::Age => {
            if let Some(employee) = employees.iter().find(|e| e.age.is_none()) {
                return Err(RegistryError::MissingAge(employee.id));
            }
            employees.sort_by_key(|e| e.age);
        }
        SortKey::Name => {
            employees.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
    Ok(())
}
