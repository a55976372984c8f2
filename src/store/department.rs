use rusqlite::{OptionalExtension, Row, params};

use super::DepartmentRepository;
use super::sqlite::{SqliteStore, query_failed};
use crate::error::Result;
use crate::types::Department;

fn department_from_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

impl DepartmentRepository for SqliteStore {
    fn list_departments(&self) -> Result<Vec<Department>> {
        let mut stmt = self
            .connection()
            .prepare("SELECT id, name FROM department ORDER BY id")
            .map_err(query_failed("failed to list departments"))?;

        let rows = stmt
            .query_map([], department_from_row)
            .map_err(query_failed("failed to list departments"))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(query_failed("failed to list departments"))
    }

    fn get_department(&self, id: i64) -> Result<Option<Department>> {
        self.connection()
            .query_row(
                "SELECT id, name FROM department WHERE id = ?1",
                params![id],
                department_from_row,
            )
            .optional()
            .map_err(query_failed("failed to fetch department"))
    }

    fn create_department(&self, name: &str) -> Result<i64> {
        let conn = self.connection();
        conn.execute("INSERT INTO department (name) VALUES (?1)", params![name])
            .map_err(query_failed("failed to add department"))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, name, "added department");
        Ok(id)
    }

    fn total_salary_by_department(&self, id: i64) -> Result<f64> {
        let total: Option<f64> = self
            .connection()
            .query_row(
                "SELECT SUM(r.salary)
                 FROM employee e
                 JOIN role r ON e.role_id = r.id
                 WHERE r.department_id = ?1",
                params![id],
                |row| row.get(0),
            )
            .map_err(query_failed("failed to total department salaries"))?;
        Ok(total.unwrap_or(0.0))
    }

    fn delete_department(&self, id: i64) -> Result<usize> {
        let rows = self
            .connection()
            .execute("DELETE FROM department WHERE id = ?1", params![id])
            .map_err(query_failed("failed to delete department"))?;
        tracing::debug!(id, rows, "deleted department");
        Ok(rows)
    }

    fn count_department_roles(&self, id: i64) -> Result<i64> {
        self.connection()
            .query_row(
                "SELECT COUNT(*) FROM role WHERE department_id = ?1",
                params![id],
                |row| row.get(0),
            )
            .map_err(query_failed("failed to count department roles"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::{EmployeeRepository, RoleRepository};
    use crate::types::{NewEmployee, NewRole};

    fn setup() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();
        store
    }

    fn add_role(store: &SqliteStore, title: &str, salary: f64, department_id: i64) -> i64 {
        store
            .create_role(&NewRole {
                title: title.to_string(),
                salary,
                department_id,
            })
            .unwrap()
    }

    fn add_employee(store: &SqliteStore, first: &str, role_id: i64) -> i64 {
        store
            .create_employee(&NewEmployee {
                first_name: first.to_string(),
                last_name: "Test".to_string(),
                role_id,
                manager_id: None,
            })
            .unwrap()
    }

    #[test]
    fn test_department_crud() {
        let store = setup();

        let eng = store.create_department("Engineering").unwrap();
        let sales = store.create_department("Sales").unwrap();
        assert_eq!(eng, 1);
        assert_eq!(sales, 2);

        let all = store.list_departments().unwrap();
        assert_eq!(
            all,
            vec![
                Department { id: 1, name: "Engineering".to_string() },
                Department { id: 2, name: "Sales".to_string() },
            ]
        );

        assert_eq!(store.get_department(sales).unwrap().unwrap().name, "Sales");

        assert_eq!(store.delete_department(eng).unwrap(), 1);
        assert!(store.get_department(eng).unwrap().is_none());
        assert_eq!(store.list_departments().unwrap().len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = setup();
        let first = store.create_department("Temp").unwrap();
        store.delete_department(first).unwrap();
        let second = store.create_department("Legal").unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_delete_unknown_department_is_noop() {
        let store = setup();
        store.create_department("Engineering").unwrap();

        assert_eq!(store.delete_department(42).unwrap(), 0);
        assert_eq!(store.list_departments().unwrap().len(), 1);
    }

    #[test]
    fn test_total_salary_counts_each_employee() {
        let store = setup();
        let dept = store.create_department("Engineering").unwrap();
        let other = store.create_department("Sales").unwrap();

        let lead = add_role(&store, "Lead", 150000.0, dept);
        let engineer = add_role(&store, "Engineer", 90000.0, dept);
        let rep = add_role(&store, "Rep", 50000.0, other);

        add_employee(&store, "Grace", lead);
        add_employee(&store, "Ada", engineer);
        add_employee(&store, "Alan", engineer);
        add_employee(&store, "Edsger", engineer);
        add_employee(&store, "Dale", rep);

        let total = store.total_salary_by_department(dept).unwrap();
        assert_eq!(total, 150000.0 * 1.0 + 90000.0 * 3.0);
        assert_eq!(store.total_salary_by_department(other).unwrap(), 50000.0);
    }

    #[test]
    fn test_total_salary_without_employees_is_zero() {
        let store = setup();
        let dept = store.create_department("Empty").unwrap();
        add_role(&store, "Unfilled", 80000.0, dept);

        assert_eq!(store.total_salary_by_department(dept).unwrap(), 0.0);
        assert_eq!(store.total_salary_by_department(999).unwrap(), 0.0);
    }

    #[test]
    fn test_ensure_department_unreferenced() {
        let store = setup();
        let dept = store.create_department("Engineering").unwrap();
        let empty = store.create_department("Empty").unwrap();
        add_role(&store, "Engineer", 90000.0, dept);

        assert_eq!(store.count_department_roles(dept).unwrap(), 1);
        assert!(matches!(
            store.ensure_department_unreferenced(dept),
            Err(Error::Conflict(_))
        ));
        assert!(store.ensure_department_unreferenced(empty).is_ok());
    }

    #[test]
    fn test_delete_referenced_department_leaves_roles_dangling() {
        let store = setup();
        let dept = store.create_department("Engineering").unwrap();
        add_role(&store, "Engineer", 90000.0, dept);

        assert_eq!(store.delete_department(dept).unwrap(), 1);

        let roles = store.list_roles().unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].department_name, None);
    }

    #[test]
    fn test_query_error_propagates() {
        let store = setup();
        store
            .connection()
            .execute_batch("DROP TABLE department")
            .unwrap();

        assert!(matches!(store.list_departments(), Err(Error::Database(_))));
        assert!(matches!(
            store.create_department("Engineering"),
            Err(Error::Database(_))
        ));
    }
}
