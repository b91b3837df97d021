use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    pub id: i32,
    pub department_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
}

/// Payload for creating or updating an employee. The ID is assigned by the
/// registry and never accepted from the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewEmployee {
    pub department_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
}
