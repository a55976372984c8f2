use std::collections::BTreeMap;
use std::fmt;

use inquire::validator::Validation;
use inquire::{InquireError, Select, Text};

use crate::error::Error;
use crate::report::{NO_MANAGER, UNASSIGNED, format_salary};
use crate::store::{DepartmentRepository, EmployeeRepository, RoleRepository};
use crate::types::{Department, EmployeeListing, RoleListing};
use crate::validation::parse_salary;

/// Department for display in a picker
pub struct DepartmentDisplay {
    pub department: Department,
}

impl fmt::Display for DepartmentDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.department.id, self.department.name)
    }
}

/// Role with department and salary for display
pub struct RoleDisplay {
    pub role: RoleListing,
}

impl fmt::Display for RoleDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let department = self.role.department_name.as_deref().unwrap_or(UNASSIGNED);
        write!(
            f,
            "{} ({}, {})",
            self.role.title,
            department,
            format_salary(self.role.salary)
        )
    }
}

/// Employee with current title for display
pub struct EmployeeDisplay {
    pub employee: EmployeeListing,
}

impl fmt::Display for EmployeeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.employee.title.as_deref().unwrap_or(UNASSIGNED);
        write!(f, "{} ({})", self.employee.full_name(), title)
    }
}

/// Manager choice, including the explicit "no manager" option
pub struct ManagerOption {
    pub label: String,
    pub id: Option<i64>,
}

impl fmt::Display for ManagerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Run a filtered select prompt. Esc and Ctrl-C yield `None`.
fn select<T: fmt::Display>(message: &str, options: Vec<T>) -> anyhow::Result<Option<T>> {
    let selection = Select::new(message, options)
        .with_page_size(15)
        .with_help_message("Type to filter, Enter to select")
        .with_vim_mode(true)
        .prompt();

    match selection {
        Ok(choice) => Ok(Some(choice)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Pick a department from the list
pub fn pick_department(
    store: &impl DepartmentRepository,
    message: &str,
) -> anyhow::Result<Option<Department>> {
    let departments: Vec<DepartmentDisplay> = store
        .list_departments()?
        .into_iter()
        .map(|department| DepartmentDisplay { department })
        .collect();

    if departments.is_empty() {
        println!("No departments found.");
        return Ok(None);
    }

    Ok(select(message, departments)?.map(|d| d.department))
}

/// Pick a role from the list
pub fn pick_role(store: &impl RoleRepository, message: &str) -> anyhow::Result<Option<RoleListing>> {
    let roles: Vec<RoleDisplay> = store
        .list_roles()?
        .into_iter()
        .map(|role| RoleDisplay { role })
        .collect();

    if roles.is_empty() {
        println!("No roles found.");
        return Ok(None);
    }

    Ok(select(message, roles)?.map(|r| r.role))
}

/// Pick an employee, optionally leaving one out
pub fn pick_employee(
    store: &impl EmployeeRepository,
    message: &str,
    exclude: Option<i64>,
) -> anyhow::Result<Option<EmployeeListing>> {
    let employees: Vec<EmployeeDisplay> = store
        .list_employees(None)?
        .into_iter()
        .filter(|e| Some(e.id) != exclude)
        .map(|employee| EmployeeDisplay { employee })
        .collect();

    if employees.is_empty() {
        println!("No employees found.");
        return Ok(None);
    }

    Ok(select(message, employees)?.map(|e| e.employee))
}

/// Pick a manager for `employee_id`. The outer `None` means cancelled, the
/// inner `None` means no manager.
pub fn pick_manager(
    store: &impl EmployeeRepository,
    message: &str,
    employee_id: Option<i64>,
) -> anyhow::Result<Option<Option<i64>>> {
    let mut options = vec![ManagerOption {
        label: NO_MANAGER.to_string(),
        id: None,
    }];
    options.extend(
        store
            .list_employees(None)?
            .into_iter()
            .filter(|e| Some(e.id) != employee_id)
            .map(|e| ManagerOption {
                label: EmployeeDisplay { employee: e.clone() }.to_string(),
                id: Some(e.id),
            }),
    );

    Ok(select(message, options)?.map(|m| m.id))
}

/// Pick one manager name out of grouped managers
pub fn pick_manager_name(
    groups: &BTreeMap<String, Vec<i64>>,
    message: &str,
) -> anyhow::Result<Option<String>> {
    select(message, groups.keys().cloned().collect())
}

/// Get a department by ID or interactively pick one
pub fn get_or_pick_department(
    store: &impl DepartmentRepository,
    department_id: Option<i64>,
    non_interactive: bool,
    message: &str,
) -> anyhow::Result<Option<Department>> {
    if let Some(id) = department_id {
        let department = store
            .get_department(id)?
            .ok_or_else(|| anyhow::anyhow!("Department not found: {}", id))?;
        Ok(Some(department))
    } else if non_interactive {
        anyhow::bail!("--department-id is required in non-interactive mode");
    } else {
        pick_department(store, message)
    }
}

/// Get a role by ID or interactively pick one
pub fn get_or_pick_role(
    store: &impl RoleRepository,
    role_id: Option<i64>,
    non_interactive: bool,
    message: &str,
) -> anyhow::Result<Option<RoleListing>> {
    if let Some(id) = role_id {
        let role = store
            .get_role(id)?
            .ok_or_else(|| anyhow::anyhow!("Role not found: {}", id))?;
        Ok(Some(role))
    } else if non_interactive {
        anyhow::bail!("--role-id is required in non-interactive mode");
    } else {
        pick_role(store, message)
    }
}

/// Look up an employee by ID
pub fn find_employee(
    store: &impl EmployeeRepository,
    employee_id: i64,
) -> anyhow::Result<EmployeeListing> {
    store
        .get_employee(employee_id)?
        .ok_or_else(|| anyhow::anyhow!("Employee not found: {}", employee_id))
}

/// Get an employee by ID or interactively pick one
pub fn get_or_pick_employee(
    store: &impl EmployeeRepository,
    employee_id: Option<i64>,
    non_interactive: bool,
    message: &str,
) -> anyhow::Result<Option<EmployeeListing>> {
    if let Some(id) = employee_id {
        Ok(Some(find_employee(store, id)?))
    } else if non_interactive {
        anyhow::bail!("--employee-id is required in non-interactive mode");
    } else {
        pick_employee(store, message, None)
    }
}

/// Prompt for free text, re-asking until `validate` accepts it. Returns the
/// trimmed input.
pub fn prompt_text(
    message: &str,
    validate: fn(&str) -> crate::error::Result<()>,
) -> anyhow::Result<String> {
    let input = Text::new(message)
        .with_validator(move |input: &str| {
            Ok(match validate(input) {
                Ok(()) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;
    Ok(input.trim().to_string())
}

/// Prompt for a positive salary
pub fn prompt_salary(message: &str) -> anyhow::Result<f64> {
    let input = Text::new(message)
        .with_placeholder("e.g., 90000")
        .with_validator(|input: &str| {
            Ok(match parse_salary(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;
    Ok(parse_salary(&input)?)
}

/// Request confirmation for a destructive operation
pub fn confirm_action(message: &str, yes: bool, non_interactive: bool) -> anyhow::Result<bool> {
    if yes {
        Ok(true)
    } else if non_interactive {
        anyhow::bail!("--yes is required for destructive operations in non-interactive mode");
    } else {
        Ok(inquire::Confirm::new(message)
            .with_default(false)
            .prompt()?)
    }
}

/// Decide whether a delete may go ahead after a reference check. With `--yes`
/// or in non-interactive mode a conflict fails; otherwise the user is asked.
pub fn allow_dangling(
    check: crate::error::Result<()>,
    yes: bool,
    non_interactive: bool,
) -> anyhow::Result<bool> {
    match check {
        Ok(()) => Ok(true),
        Err(Error::Conflict(msg)) if yes || non_interactive => {
            anyhow::bail!("{msg} (use --force to delete anyway)")
        }
        Err(Error::Conflict(msg)) => Ok(inquire::Confirm::new(&format!("{msg}. Delete anyway?"))
            .with_default(false)
            .prompt()?),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_dangling_without_conflict() {
        assert!(allow_dangling(Ok(()), false, true).unwrap());
        assert!(allow_dangling(Ok(()), true, false).unwrap());
    }

    #[test]
    fn test_allow_dangling_conflict_with_yes_fails_without_prompt() {
        let conflict = || -> crate::error::Result<()> {
            Err(Error::Conflict("role 2 is still held by 1 employee(s)".to_string()))
        };

        let err = allow_dangling(conflict(), true, false).unwrap_err();
        assert!(err.to_string().contains("use --force"));

        let err = allow_dangling(conflict(), false, true).unwrap_err();
        assert!(err.to_string().contains("use --force"));
    }

    #[test]
    fn test_allow_dangling_passes_other_errors_through() {
        let err = allow_dangling(Err(Error::Validation("bad".to_string())), true, true).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Validation(_))));
    }
}
