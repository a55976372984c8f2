mod department;
mod employee;
mod role;
mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::{Error, Result};
use crate::types::*;

/// Queries and commands over the `department` table.
pub trait DepartmentRepository {
    fn list_departments(&self) -> Result<Vec<Department>>;
    fn get_department(&self, id: i64) -> Result<Option<Department>>;
    fn create_department(&self, name: &str) -> Result<i64>;
    /// Sum of role salaries over every employee in the department; `0.0`
    /// when the department has no employees.
    fn total_salary_by_department(&self, id: i64) -> Result<f64>;
    /// Returns the number of rows removed; an unknown id removes nothing.
    fn delete_department(&self, id: i64) -> Result<usize>;
    fn count_department_roles(&self, id: i64) -> Result<i64>;

    fn ensure_department_unreferenced(&self, id: i64) -> Result<()> {
        let roles = self.count_department_roles(id)?;
        if roles > 0 {
            return Err(Error::Conflict(format!(
                "department {id} is still referenced by {roles} role(s)"
            )));
        }
        Ok(())
    }
}

/// Queries and commands over the `role` table.
pub trait RoleRepository {
    fn list_roles(&self) -> Result<Vec<RoleListing>>;
    fn get_role(&self, id: i64) -> Result<Option<RoleListing>>;
    fn create_role(&self, role: &NewRole) -> Result<i64>;
    fn delete_role(&self, id: i64) -> Result<usize>;
    fn count_role_employees(&self, id: i64) -> Result<i64>;

    fn ensure_role_unreferenced(&self, id: i64) -> Result<()> {
        let employees = self.count_role_employees(id)?;
        if employees > 0 {
            return Err(Error::Conflict(format!(
                "role {id} is still held by {employees} employee(s)"
            )));
        }
        Ok(())
    }
}

/// Queries and commands over the `employee` table.
pub trait EmployeeRepository {
    /// All employees with role, department, and manager resolved. With a
    /// department id, only employees whose role belongs to it.
    fn list_employees(&self, department_id: Option<i64>) -> Result<Vec<EmployeeListing>>;
    fn get_employee(&self, id: i64) -> Result<Option<EmployeeListing>>;
    fn create_employee(&self, employee: &NewEmployee) -> Result<i64>;
    fn update_employee_role(&self, employee_id: i64, role_id: i64) -> Result<usize>;
    /// Fails with [`Error::Conflict`] if the new manager would close a cycle.
    fn update_employee_manager(&self, employee_id: i64, manager_id: Option<i64>) -> Result<usize>;
    /// Employees whose role belongs to the department. Employees with a
    /// dangling role are left out.
    fn list_employees_by_department(&self, department_id: i64) -> Result<Vec<DepartmentEmployee>>;
    fn delete_employee(&self, id: i64) -> Result<usize>;
    fn count_direct_reports(&self, id: i64) -> Result<i64>;

    fn ensure_employee_unreferenced(&self, id: i64) -> Result<()> {
        let reports = self.count_direct_reports(id)?;
        if reports > 0 {
            return Err(Error::Conflict(format!(
                "employee {id} still manages {reports} employee(s)"
            )));
        }
        Ok(())
    }
}

/// Everything the CLI needs from storage.
pub trait Store: DepartmentRepository + RoleRepository + EmployeeRepository {}

impl<T: DepartmentRepository + RoleRepository + EmployeeRepository> Store for T {}
