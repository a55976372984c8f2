mod commands;
mod department;
mod employee;
mod menu;
pub mod pickers;
mod role;
pub mod table;

pub use commands::{DepartmentCommands, EmployeeCommands, RoleCommands};
pub use department::{
    run_department_add, run_department_budget, run_department_delete, run_department_list,
};
pub use employee::{
    run_employee_add, run_employee_by_department, run_employee_by_manager, run_employee_delete,
    run_employee_list, run_employee_update_manager, run_employee_update_role,
};
pub use menu::{MenuAction, run_menu};
pub use role::{run_role_add, run_role_delete, run_role_list};

use serde::Serialize;

use crate::config::DatabaseConfig;
use crate::store::SqliteStore;

/// Open the configured database, checking it has been initialized
pub fn init_store(config: &DatabaseConfig) -> anyhow::Result<SqliteStore> {
    if !config.exists() {
        anyhow::bail!(
            "Database not found at {}. Run 'roster init' first.",
            config.path.display()
        );
    }

    SqliteStore::open(config).map_err(Into::into)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
