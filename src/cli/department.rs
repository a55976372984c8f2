use serde::Serialize;

use crate::report::{format_salary, to_department_table};
use crate::store::DepartmentRepository;
use crate::validation::validate_department_name;

use super::pickers::{
    allow_dangling, confirm_action, get_or_pick_department, pick_department, prompt_text,
};
use super::print_json;
use super::table::print_table;

#[derive(Serialize)]
struct BudgetOutput {
    department_id: i64,
    department: String,
    total_salary: f64,
}

pub fn run_department_list(store: &impl DepartmentRepository, json: bool) -> anyhow::Result<()> {
    let departments = store.list_departments()?;

    if json {
        return print_json(&departments);
    }

    print_table(&to_department_table(&departments), "No departments found.");
    Ok(())
}

pub fn run_department_add(
    store: &impl DepartmentRepository,
    name: Option<String>,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let name = if let Some(n) = name {
        validate_department_name(&n)?;
        n.trim().to_string()
    } else if non_interactive {
        anyhow::bail!("--name is required in non-interactive mode");
    } else {
        prompt_text("Department name:", validate_department_name)?
    };

    let id = store.create_department(&name)?;

    println!();
    println!("Added department '{}' (id {})", name, id);
    println!();

    Ok(())
}

pub fn run_department_budget(
    store: &impl DepartmentRepository,
    department_id: Option<i64>,
    json: bool,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let Some(department) = get_or_pick_department(
        store,
        department_id,
        non_interactive,
        "Select a department to view its budget:",
    )?
    else {
        return Ok(());
    };

    let total = store.total_salary_by_department(department.id)?;

    if json {
        return print_json(&BudgetOutput {
            department_id: department.id,
            department: department.name,
            total_salary: total,
        });
    }

    println!();
    println!(
        "Total budget of the {} department: {}",
        department.name,
        format_salary(total)
    );
    println!();

    Ok(())
}

pub fn run_department_delete(
    store: &impl DepartmentRepository,
    department_id: Option<i64>,
    non_interactive: bool,
    yes: bool,
    force: bool,
) -> anyhow::Result<()> {
    let (id, label) = if let Some(id) = department_id {
        (id, format!("department {id}"))
    } else if non_interactive {
        anyhow::bail!("a department ID is required in non-interactive mode");
    } else {
        match pick_department(store, "Select a department to delete:")? {
            Some(d) => (d.id, format!("department '{}'", d.name)),
            None => return Ok(()),
        }
    };

    if !force && !allow_dangling(store.ensure_department_unreferenced(id), yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    if !confirm_action(&format!("Delete {label}?"), yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    let rows = store.delete_department(id)?;

    println!();
    if rows == 0 {
        println!("Nothing deleted: {label} does not exist");
    } else {
        println!("Deleted {label}");
    }
    println!();

    Ok(())
}
