use std::fmt;

use inquire::{InquireError, Select};

use crate::store::Store;

use super::{
    run_department_add, run_department_budget, run_department_delete, run_department_list,
    run_employee_add, run_employee_by_department, run_employee_by_manager, run_employee_delete,
    run_employee_list, run_employee_update_manager, run_employee_update_role, run_role_add,
    run_role_delete, run_role_list,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    ViewEmployeesByManager,
    ViewEmployeesByDepartment,
    ViewDepartmentBudget,
    DeleteDepartment,
    DeleteRole,
    DeleteEmployee,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 15] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::UpdateEmployeeManager,
        MenuAction::ViewEmployeesByManager,
        MenuAction::ViewEmployeesByDepartment,
        MenuAction::ViewDepartmentBudget,
        MenuAction::DeleteDepartment,
        MenuAction::DeleteRole,
        MenuAction::DeleteEmployee,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "View all departments",
            MenuAction::ViewRoles => "View all roles",
            MenuAction::ViewEmployees => "View all employees",
            MenuAction::AddDepartment => "Add a department",
            MenuAction::AddRole => "Add a role",
            MenuAction::AddEmployee => "Add an employee",
            MenuAction::UpdateEmployeeRole => "Update an employee's role",
            MenuAction::UpdateEmployeeManager => "Update an employee's manager",
            MenuAction::ViewEmployeesByManager => "View employees by manager",
            MenuAction::ViewEmployeesByDepartment => "View employees by department",
            MenuAction::ViewDepartmentBudget => "View department budget",
            MenuAction::DeleteDepartment => "Delete a department",
            MenuAction::DeleteRole => "Delete a role",
            MenuAction::DeleteEmployee => "Delete an employee",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn perform(store: &impl Store, action: MenuAction) -> anyhow::Result<()> {
    match action {
        MenuAction::ViewDepartments => run_department_list(store, false),
        MenuAction::ViewRoles => run_role_list(store, false),
        MenuAction::ViewEmployees => run_employee_list(store, None, false),
        MenuAction::AddDepartment => run_department_add(store, None, false),
        MenuAction::AddRole => run_role_add(store, None, None, None, false),
        MenuAction::AddEmployee => run_employee_add(store, None, None, None, None, false),
        MenuAction::UpdateEmployeeRole => run_employee_update_role(store, None, None, false),
        MenuAction::UpdateEmployeeManager => {
            run_employee_update_manager(store, None, None, false, false)
        }
        MenuAction::ViewEmployeesByManager => run_employee_by_manager(store, None, false, false),
        MenuAction::ViewEmployeesByDepartment => {
            run_employee_by_department(store, None, false, false)
        }
        MenuAction::ViewDepartmentBudget => run_department_budget(store, None, false, false),
        MenuAction::DeleteDepartment => run_department_delete(store, None, false, false, false),
        MenuAction::DeleteRole => run_role_delete(store, None, false, false, false),
        MenuAction::DeleteEmployee => run_employee_delete(store, None, false, false, false),
        MenuAction::Exit => Ok(()),
    }
}

fn is_cancellation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

/// Show the main menu until the user exits. One action runs to completion
/// before the menu comes back; a failed action is reported and the menu
/// shown again.
pub fn run_menu(store: &impl Store) -> anyhow::Result<()> {
    loop {
        let selection = Select::new("Select an option:", MenuAction::ALL.to_vec())
            .with_page_size(MenuAction::ALL.len())
            .with_vim_mode(true)
            .prompt();

        let action = match selection {
            Ok(MenuAction::Exit)
            | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Ok(action) => action,
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = perform(store, action) {
            if is_cancellation(&e) {
                println!("Cancelled.");
            } else {
                tracing::error!(action = %action, "{e:#}");
                eprintln!("Error: {e:#}");
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
