pub const SCHEMA: &str = r#"
-- Departments
CREATE TABLE IF NOT EXISTS department (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Roles belong to a department
CREATE TABLE IF NOT EXISTS role (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    salary REAL NOT NULL,
    department_id INTEGER NOT NULL REFERENCES department(id)
);

-- Employees hold a role and optionally report to another employee
CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    role_id INTEGER NOT NULL REFERENCES role(id),
    manager_id INTEGER REFERENCES employee(id)  -- NULL = no manager
);

CREATE INDEX IF NOT EXISTS idx_role_department ON role(department_id);
CREATE INDEX IF NOT EXISTS idx_employee_role ON employee(role_id);
CREATE INDEX IF NOT EXISTS idx_employee_manager ON employee(manager_id);
"#;
