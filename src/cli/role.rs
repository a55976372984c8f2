use crate::report::{format_salary, to_role_table};
use crate::store::{DepartmentRepository, RoleRepository};
use crate::types::NewRole;
use crate::validation::{validate_role_title, validate_salary};

use super::pickers::{
    allow_dangling, confirm_action, get_or_pick_department, pick_role, prompt_salary, prompt_text,
};
use super::print_json;
use super::table::print_table;

pub fn run_role_list(store: &impl RoleRepository, json: bool) -> anyhow::Result<()> {
    let roles = store.list_roles()?;

    if json {
        return print_json(&roles);
    }

    print_table(&to_role_table(&roles), "No roles found.");
    Ok(())
}

pub fn run_role_add<S>(
    store: &S,
    title: Option<String>,
    salary: Option<f64>,
    department_id: Option<i64>,
    non_interactive: bool,
) -> anyhow::Result<()>
where
    S: DepartmentRepository + RoleRepository,
{
    let title = if let Some(t) = title {
        validate_role_title(&t)?;
        t.trim().to_string()
    } else if non_interactive {
        anyhow::bail!("--title is required in non-interactive mode");
    } else {
        prompt_text("Role title:", validate_role_title)?
    };

    let salary = if let Some(s) = salary {
        validate_salary(s)?;
        s
    } else if non_interactive {
        anyhow::bail!("--salary is required in non-interactive mode");
    } else {
        prompt_salary("Salary:")?
    };

    let Some(department) = get_or_pick_department(
        store,
        department_id,
        non_interactive,
        "Department for this role:",
    )?
    else {
        return Ok(());
    };

    let id = store.create_role(&NewRole {
        title: title.clone(),
        salary,
        department_id: department.id,
    })?;

    println!();
    println!(
        "Added role '{}' in {} at {} (id {})",
        title,
        department.name,
        format_salary(salary),
        id
    );
    println!();

    Ok(())
}

pub fn run_role_delete(
    store: &impl RoleRepository,
    role_id: Option<i64>,
    non_interactive: bool,
    yes: bool,
    force: bool,
) -> anyhow::Result<()> {
    let (id, label) = if let Some(id) = role_id {
        (id, format!("role {id}"))
    } else if non_interactive {
        anyhow::bail!("a role ID is required in non-interactive mode");
    } else {
        match pick_role(store, "Select a role to delete:")? {
            Some(r) => (r.id, format!("role '{}'", r.title)),
            None => return Ok(()),
        }
    };

    if !force && !allow_dangling(store.ensure_role_unreferenced(id), yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    if !confirm_action(&format!("Delete {label}?"), yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    let rows = store.delete_role(id)?;

    println!();
    if rows == 0 {
        println!("Nothing deleted: {label} does not exist");
    } else {
        println!("Deleted {label}");
    }
    println!();

    Ok(())
}
