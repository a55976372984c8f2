use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// A role joined with its department. `department_name` is `None` when the
/// department row no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleListing {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department_name: Option<String>,
}

/// An employee joined with role, department, and manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeListing {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub manager_id: Option<i64>,
    /// Manager's full name, `None` without a (surviving) manager.
    pub manager: Option<String>,
}

impl EmployeeListing {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentEmployee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<i64>,
}
