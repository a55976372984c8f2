use rusqlite::{OptionalExtension, Row, params};

use super::EmployeeRepository;
use super::sqlite::{SqliteStore, query_failed};
use crate::error::{Error, Result};
use crate::types::{DepartmentEmployee, EmployeeListing, NewEmployee};

const LIST_EMPLOYEES: &str = "
    SELECT employee.id,
           employee.first_name,
           employee.last_name,
           role.title,
           department.name,
           role.salary,
           employee.manager_id,
           manager.first_name || ' ' || manager.last_name
    FROM employee
    LEFT JOIN role ON employee.role_id = role.id
    LEFT JOIN department ON role.department_id = department.id
    LEFT JOIN employee AS manager ON manager.id = employee.manager_id";

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<EmployeeListing> {
    Ok(EmployeeListing {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        title: row.get(3)?,
        department: row.get(4)?,
        salary: row.get(5)?,
        manager_id: row.get(6)?,
        manager: row.get(7)?,
    })
}

impl SqliteStore {
    /// Whether `employee_id` is `manager_id` itself or sits anywhere above
    /// it in the reporting chain.
    fn manages_transitively(&self, employee_id: i64, manager_id: i64) -> Result<bool> {
        self.connection()
            .query_row(
                "WITH RECURSIVE chain(id) AS (
                     SELECT ?1
                     UNION
                     SELECT employee.manager_id
                     FROM employee JOIN chain ON employee.id = chain.id
                     WHERE employee.manager_id IS NOT NULL
                 )
                 SELECT EXISTS (SELECT 1 FROM chain WHERE id = ?2)",
                params![manager_id, employee_id],
                |row| row.get(0),
            )
            .map_err(query_failed("failed to walk manager chain"))
    }
}

impl EmployeeRepository for SqliteStore {
    fn list_employees(&self, department_id: Option<i64>) -> Result<Vec<EmployeeListing>> {
        let sql = match department_id {
            Some(_) => format!("{LIST_EMPLOYEES} WHERE role.department_id = ?1 ORDER BY employee.id"),
            None => format!("{LIST_EMPLOYEES} ORDER BY employee.id"),
        };

        let mut stmt = self
            .connection()
            .prepare(&sql)
            .map_err(query_failed("failed to list employees"))?;

        let rows = match department_id {
            Some(id) => stmt.query_map(params![id], listing_from_row),
            None => stmt.query_map([], listing_from_row),
        }
        .map_err(query_failed("failed to list employees"))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(query_failed("failed to list employees"))
    }

    fn get_employee(&self, id: i64) -> Result<Option<EmployeeListing>> {
        self.connection()
            .query_row(
                &format!("{LIST_EMPLOYEES} WHERE employee.id = ?1"),
                params![id],
                listing_from_row,
            )
            .optional()
            .map_err(query_failed("failed to fetch employee"))
    }

    fn create_employee(&self, employee: &NewEmployee) -> Result<i64> {
        let conn = self.connection();
        conn.execute(
            "INSERT INTO employee (first_name, last_name, role_id, manager_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                employee.first_name,
                employee.last_name,
                employee.role_id,
                employee.manager_id,
            ],
        )
        .map_err(query_failed("failed to add employee"))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, role_id = employee.role_id, manager_id = ?employee.manager_id, "added employee");
        Ok(id)
    }

    fn update_employee_role(&self, employee_id: i64, role_id: i64) -> Result<usize> {
        let rows = self
            .connection()
            .execute(
                "UPDATE employee SET role_id = ?1 WHERE id = ?2",
                params![role_id, employee_id],
            )
            .map_err(query_failed("failed to update employee role"))?;
        tracing::debug!(employee_id, role_id, rows, "updated employee role");
        Ok(rows)
    }

    fn update_employee_manager(&self, employee_id: i64, manager_id: Option<i64>) -> Result<usize> {
        if let Some(manager_id) = manager_id {
            if manager_id == employee_id {
                return Err(Error::Conflict(format!(
                    "employee {employee_id} cannot be their own manager"
                )));
            }
            if self.manages_transitively(employee_id, manager_id)? {
                return Err(Error::Conflict(format!(
                    "employee {employee_id} already manages employee {manager_id}, directly or indirectly"
                )));
            }
        }

        let rows = self
            .connection()
            .execute(
                "UPDATE employee SET manager_id = ?1 WHERE id = ?2",
                params![manager_id, employee_id],
            )
            .map_err(query_failed("failed to update employee manager"))?;
        tracing::debug!(employee_id, manager_id = ?manager_id, rows, "updated employee manager");
        Ok(rows)
    }

    fn list_employees_by_department(&self, department_id: i64) -> Result<Vec<DepartmentEmployee>> {
        let mut stmt = self
            .connection()
            .prepare(
                "SELECT employee.id, employee.first_name, employee.last_name, role.title, role.salary
                 FROM employee
                 INNER JOIN role ON employee.role_id = role.id
                 WHERE role.department_id = ?1
                 ORDER BY employee.id",
            )
            .map_err(query_failed("failed to list employees by department"))?;

        let rows = stmt
            .query_map(params![department_id], |row| {
                Ok(DepartmentEmployee {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    title: row.get(3)?,
                    salary: row.get(4)?,
                })
            })
            .map_err(query_failed("failed to list employees by department"))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(query_failed("failed to list employees by department"))
    }

    fn delete_employee(&self, id: i64) -> Result<usize> {
        let rows = self
            .connection()
            .execute("DELETE FROM employee WHERE id = ?1", params![id])
            .map_err(query_failed("failed to delete employee"))?;
        tracing::debug!(id, rows, "deleted employee");
        Ok(rows)
    }

    fn count_direct_reports(&self, id: i64) -> Result<i64> {
        self.connection()
            .query_row(
                "SELECT COUNT(*) FROM employee WHERE manager_id = ?1",
                params![id],
                |row| row.get(0),
            )
            .map_err(query_failed("failed to count direct reports"))
    }
}
