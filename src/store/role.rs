use rusqlite::{OptionalExtension, Row, params};

use super::RoleRepository;
use super::sqlite::{SqliteStore, query_failed};
use crate::error::Result;
use crate::types::{NewRole, RoleListing};

const LIST_ROLES: &str = "
    SELECT role.id, role.title, role.salary, department.name
    FROM role
    LEFT JOIN department ON role.department_id = department.id";

fn role_from_row(row: &Row<'_>) -> rusqlite::Result<RoleListing> {
    Ok(RoleListing {
        id: row.get(0)?,
        title: row.get(1)?,
        salary: row.get(2)?,
        department_name: row.get(3)?,
    })
}

impl RoleRepository for SqliteStore {
    fn list_roles(&self) -> Result<Vec<RoleListing>> {
        let mut stmt = self
            .connection()
            .prepare(&format!("{LIST_ROLES} ORDER BY role.id"))
            .map_err(query_failed("failed to list roles"))?;

        let rows = stmt
            .query_map([], role_from_row)
            .map_err(query_failed("failed to list roles"))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(query_failed("failed to list roles"))
    }

    fn get_role(&self, id: i64) -> Result<Option<RoleListing>> {
        self.connection()
            .query_row(
                &format!("{LIST_ROLES} WHERE role.id = ?1"),
                params![id],
                role_from_row,
            )
            .optional()
            .map_err(query_failed("failed to fetch role"))
    }

    fn create_role(&self, role: &NewRole) -> Result<i64> {
        let conn = self.connection();
        conn.execute(
            "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)",
            params![role.title, role.salary, role.department_id],
        )
        .map_err(query_failed("failed to add role"))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, title = %role.title, department_id = role.department_id, "added role");
        Ok(id)
    }

    fn delete_role(&self, id: i64) -> Result<usize> {
        let rows = self
            .connection()
            .execute("DELETE FROM role WHERE id = ?1", params![id])
            .map_err(query_failed("failed to delete role"))?;
        tracing::debug!(id, rows, "deleted role");
        Ok(rows)
    }

    fn count_role_employees(&self, id: i64) -> Result<i64> {
        self.connection()
            .query_row(
                "SELECT COUNT(*) FROM employee WHERE role_id = ?1",
                params![id],
                |row| row.get(0),
            )
            .map_err(query_failed("failed to count role employees"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::{DepartmentRepository, EmployeeRepository};
    use crate::types::NewEmployee;

    fn setup() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();
        store
    }

    fn new_role(title: &str, salary: f64, department_id: i64) -> NewRole {
        NewRole {
            title: title.to_string(),
            salary,
            department_id,
        }
    }

    #[test]
    fn test_create_then_list_includes_department_name() {
        let store = setup();
        store.create_department("Sales").unwrap();
        let dept = store.create_department("Engineering").unwrap();

        let id = store.create_role(&new_role("Engineer", 90000.0, dept)).unwrap();

        let roles = store.list_roles().unwrap();
        assert!(roles.contains(&RoleListing {
            id,
            title: "Engineer".to_string(),
            salary: 90000.0,
            department_name: Some("Engineering".to_string()),
        }));
    }

    #[test]
    fn test_get_role() {
        let store = setup();
        let dept = store.create_department("Engineering").unwrap();
        let id = store.create_role(&new_role("Engineer", 90000.0, dept)).unwrap();
        let orphan = store.create_role(&new_role("Orphan", 1000.0, 77)).unwrap();

        let role = store.get_role(id).unwrap().unwrap();
        assert_eq!(role.title, "Engineer");
        assert_eq!(role.department_name.as_deref(), Some("Engineering"));

        assert_eq!(store.get_role(orphan).unwrap().unwrap().department_name, None);
        assert!(store.get_role(999).unwrap().is_none());
    }

    #[test]
    fn test_fractional_salary_round_trips() {
        let store = setup();
        let dept = store.create_department("Finance").unwrap();
        store.create_role(&new_role("Analyst", 61234.56, dept)).unwrap();

        assert_eq!(store.list_roles().unwrap()[0].salary, 61234.56);
    }

    #[test]
    fn test_role_with_missing_department_still_listed() {
        let store = setup();
        store.create_role(&new_role("Orphan", 1000.0, 77)).unwrap();

        let roles = store.list_roles().unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].title, "Orphan");
        assert_eq!(roles[0].department_name, None);
    }

    #[test]
    fn test_delete_role() {
        let store = setup();
        let dept = store.create_department("Engineering").unwrap();
        let id = store.create_role(&new_role("Engineer", 90000.0, dept)).unwrap();

        assert_eq!(store.delete_role(id).unwrap(), 1);
        assert_eq!(store.delete_role(id).unwrap(), 0);
        assert!(store.list_roles().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_role_unreferenced() {
        let store = setup();
        let dept = store.create_department("Engineering").unwrap();
        let held = store.create_role(&new_role("Engineer", 90000.0, dept)).unwrap();
        let vacant = store.create_role(&new_role("Intern", 20000.0, dept)).unwrap();
        store
            .create_employee(&NewEmployee {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                role_id: held,
                manager_id: None,
            })
            .unwrap();

        assert_eq!(store.count_role_employees(held).unwrap(), 1);
        assert!(matches!(
            store.ensure_role_unreferenced(held),
            Err(Error::Conflict(_))
        ));
        assert!(store.ensure_role_unreferenced(vacant).is_ok());
    }

    #[test]
    fn test_foreign_keys_enforced_when_enabled() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = SqliteStore::open(&crate::config::DatabaseConfig {
            path: temp.path().join("fk.db"),
            foreign_keys: true,
        })
        .unwrap();
        store.initialize().unwrap();

        let result = store.create_role(&new_role("Orphan", 1000.0, 77));
        assert!(matches!(result, Err(Error::Database(_))));
    }
}
