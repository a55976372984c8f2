use crate::report::{
    NO_MANAGER, employees_reporting_to, group_employees_by_manager, to_department_employee_table,
    to_employee_table,
};
use crate::store::{DepartmentRepository, EmployeeRepository, RoleRepository, Store};
use crate::types::{EmployeeListing, NewEmployee};
use crate::validation::{validate_first_name, validate_last_name};

use super::pickers::{
    allow_dangling, confirm_action, find_employee, get_or_pick_department, get_or_pick_employee,
    get_or_pick_role, pick_employee, pick_manager, pick_manager_name, prompt_text,
};
use super::print_json;
use super::table::print_table;

fn manager_label(store: &impl EmployeeRepository, manager_id: Option<i64>) -> anyhow::Result<String> {
    match manager_id {
        Some(id) => Ok(find_employee(store, id)?.full_name()),
        None => Ok(NO_MANAGER.to_string()),
    }
}

pub fn run_employee_list(
    store: &impl EmployeeRepository,
    department_id: Option<i64>,
    json: bool,
) -> anyhow::Result<()> {
    let employees = store.list_employees(department_id)?;

    if json {
        return print_json(&employees);
    }

    print_table(&to_employee_table(&employees), "No employees found.");
    Ok(())
}

pub fn run_employee_add<S: Store>(
    store: &S,
    first_name: Option<String>,
    last_name: Option<String>,
    role_id: Option<i64>,
    manager_id: Option<i64>,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let first_name = if let Some(n) = first_name {
        validate_first_name(&n)?;
        n.trim().to_string()
    } else if non_interactive {
        anyhow::bail!("--first-name is required in non-interactive mode");
    } else {
        prompt_text("First name:", validate_first_name)?
    };

    let last_name = if let Some(n) = last_name {
        validate_last_name(&n)?;
        n.trim().to_string()
    } else if non_interactive {
        anyhow::bail!("--last-name is required in non-interactive mode");
    } else {
        prompt_text("Last name:", validate_last_name)?
    };

    let Some(role) = get_or_pick_role(store, role_id, non_interactive, "Role:")? else {
        return Ok(());
    };

    let manager_id = if let Some(id) = manager_id {
        find_employee(store, id)?;
        Some(id)
    } else if non_interactive {
        None
    } else {
        match pick_manager(store, "Manager:", None)? {
            Some(choice) => choice,
            None => return Ok(()),
        }
    };

    let id = store.create_employee(&NewEmployee {
        first_name: first_name.clone(),
        last_name: last_name.clone(),
        role_id: role.id,
        manager_id,
    })?;

    println!();
    println!(
        "Added employee '{} {}' as {} (id {})",
        first_name, last_name, role.title, id
    );
    println!();

    Ok(())
}

pub fn run_employee_update_role<S>(
    store: &S,
    employee_id: Option<i64>,
    role_id: Option<i64>,
    non_interactive: bool,
) -> anyhow::Result<()>
where
    S: EmployeeRepository + RoleRepository,
{
    let Some(employee) = get_or_pick_employee(
        store,
        employee_id,
        non_interactive,
        "Select an employee to update:",
    )?
    else {
        return Ok(());
    };

    let Some(role) = get_or_pick_role(store, role_id, non_interactive, "New role:")? else {
        return Ok(());
    };

    store.update_employee_role(employee.id, role.id)?;

    println!();
    println!("Updated role of {} to {}", employee.full_name(), role.title);
    println!();

    Ok(())
}

pub fn run_employee_update_manager(
    store: &impl EmployeeRepository,
    employee_id: Option<i64>,
    manager_id: Option<i64>,
    no_manager: bool,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let Some(employee) = get_or_pick_employee(
        store,
        employee_id,
        non_interactive,
        "Select an employee to update:",
    )?
    else {
        return Ok(());
    };

    let manager_id = if no_manager {
        None
    } else if let Some(id) = manager_id {
        find_employee(store, id)?;
        Some(id)
    } else if non_interactive {
        anyhow::bail!("--manager-id or --no-manager is required in non-interactive mode");
    } else {
        match pick_manager(store, "New manager:", Some(employee.id))? {
            Some(choice) => choice,
            None => return Ok(()),
        }
    };

    store.update_employee_manager(employee.id, manager_id)?;

    println!();
    println!(
        "Updated manager of {} to {}",
        employee.full_name(),
        manager_label(store, manager_id)?
    );
    println!();

    Ok(())
}

pub fn run_employee_by_manager(
    store: &impl EmployeeRepository,
    manager: Option<String>,
    json: bool,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let employees = store.list_employees(None)?;
    let groups = group_employees_by_manager(&employees);

    let name = if let Some(name) = manager {
        if !groups.contains_key(&name) {
            anyhow::bail!("No employees report to '{}'", name);
        }
        name
    } else if non_interactive {
        anyhow::bail!("--manager is required in non-interactive mode");
    } else if groups.is_empty() {
        println!("No managers found.");
        return Ok(());
    } else {
        match pick_manager_name(&groups, "Select a manager:")? {
            Some(name) => name,
            None => return Ok(()),
        }
    };

    let manager_ids = &groups[&name];
    let reports: Vec<EmployeeListing> = employees_reporting_to(&employees, manager_ids)
        .into_iter()
        .cloned()
        .collect();

    if json {
        return print_json(&reports);
    }

    if manager_ids.len() > 1 {
        println!();
        println!(
            "Note: {} different managers are named '{}'; their reports are listed together.",
            manager_ids.len(),
            name
        );
    }
    print_table(&to_employee_table(&reports), "No employees found.");
    Ok(())
}

pub fn run_employee_by_department<S>(
    store: &S,
    department_id: Option<i64>,
    json: bool,
    non_interactive: bool,
) -> anyhow::Result<()>
where
    S: DepartmentRepository + EmployeeRepository,
{
    let Some(department) = get_or_pick_department(
        store,
        department_id,
        non_interactive,
        "Select a department:",
    )?
    else {
        return Ok(());
    };

    let employees = store.list_employees_by_department(department.id)?;

    if json {
        return print_json(&employees);
    }

    print_table(
        &to_department_employee_table(&employees),
        &format!("No employees found in {}.", department.name),
    );
    Ok(())
}

pub fn run_employee_delete(
    store: &impl EmployeeRepository,
    employee_id: Option<i64>,
    non_interactive: bool,
    yes: bool,
    force: bool,
) -> anyhow::Result<()> {
    let (id, label) = if let Some(id) = employee_id {
        (id, format!("employee {id}"))
    } else if non_interactive {
        anyhow::bail!("an employee ID is required in non-interactive mode");
    } else {
        match pick_employee(store, "Select an employee to delete:", None)? {
            Some(e) => (e.id, format!("employee '{}'", e.full_name())),
            None => return Ok(()),
        }
    };

    if !force && !allow_dangling(store.ensure_employee_unreferenced(id), yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    if !confirm_action(&format!("Delete {label}?"), yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    let rows = store.delete_employee(id)?;

    println!();
    if rows == 0 {
        println!("Nothing deleted: {label} does not exist");
    } else {
        println!("Deleted {label}");
    }
    println!();

    Ok(())
}
