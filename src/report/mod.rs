//! Display shaping for query results.
//!
//! Everything here is a pure function of its input: no storage access and no
//! terminal output. The CLI renders the resulting rows.

mod manager;

pub use manager::{employees_reporting_to, group_employees_by_manager};

use serde::Serialize;

use crate::types::{Department, DepartmentEmployee, EmployeeListing, RoleListing};

/// Shown in place of an absent manager.
pub const NO_MANAGER: &str = "No Manager";
/// Shown in place of a role or department that no longer exists.
pub const UNASSIGNED: &str = "Unassigned";

/// A row that can be laid out as a text table.
pub trait TableRow {
    const HEADERS: &'static [&'static str];
    /// Column indexes rendered flush right.
    const RIGHT_ALIGNED: &'static [usize] = &[];

    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTableRow {
    #[serde(rename = "Department_ID")]
    pub department_id: i64,
    #[serde(rename = "Department_Name")]
    pub department_name: String,
}

impl TableRow for DepartmentTableRow {
    const HEADERS: &'static [&'static str] = &["Department_ID", "Department_Name"];

    fn cells(&self) -> Vec<String> {
        vec![self.department_id.to_string(), self.department_name.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleTableRow {
    #[serde(rename = "Role_ID")]
    pub role_id: i64,
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Salary")]
    pub salary: String,
}

impl TableRow for RoleTableRow {
    const HEADERS: &'static [&'static str] = &["Role_ID", "Job_Title", "Department", "Salary"];
    const RIGHT_ALIGNED: &'static [usize] = &[3];

    fn cells(&self) -> Vec<String> {
        vec![
            self.role_id.to_string(),
            self.job_title.clone(),
            self.department.clone(),
            self.salary.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeTableRow {
    #[serde(rename = "Employee_ID")]
    pub employee_id: i64,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Manager")]
    pub manager: String,
}

impl TableRow for EmployeeTableRow {
    const HEADERS: &'static [&'static str] = &[
        "Employee_ID",
        "First_Name",
        "Last_Name",
        "Job_Title",
        "Department",
        "Salary",
        "Manager",
    ];
    const RIGHT_ALIGNED: &'static [usize] = &[5];

    fn cells(&self) -> Vec<String> {
        vec![
            self.employee_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.job_title.clone(),
            self.department.clone(),
            self.salary.clone(),
            self.manager.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentEmployeeTableRow {
    #[serde(rename = "Employee_ID")]
    pub employee_id: i64,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Salary")]
    pub salary: String,
}

impl TableRow for DepartmentEmployeeTableRow {
    const HEADERS: &'static [&'static str] =
        &["Employee_ID", "First_Name", "Last_Name", "Job_Title", "Salary"];
    const RIGHT_ALIGNED: &'static [usize] = &[4];

    fn cells(&self) -> Vec<String> {
        vec![
            self.employee_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.job_title.clone(),
            self.salary.clone(),
        ]
    }
}

pub fn to_department_table(departments: &[Department]) -> Vec<DepartmentTableRow> {
    departments
        .iter()
        .map(|d| DepartmentTableRow {
            department_id: d.id,
            department_name: d.name.clone(),
        })
        .collect()
}

pub fn to_role_table(roles: &[RoleListing]) -> Vec<RoleTableRow> {
    roles
        .iter()
        .map(|r| RoleTableRow {
            role_id: r.id,
            job_title: r.title.clone(),
            department: r.department_name.clone().unwrap_or_else(|| UNASSIGNED.to_string()),
            salary: format_salary(r.salary),
        })
        .collect()
}

pub fn to_employee_table(employees: &[EmployeeListing]) -> Vec<EmployeeTableRow> {
    employees
        .iter()
        .map(|e| EmployeeTableRow {
            employee_id: e.id,
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            job_title: e.title.clone().unwrap_or_else(|| UNASSIGNED.to_string()),
            department: e.department.clone().unwrap_or_else(|| UNASSIGNED.to_string()),
            salary: e.salary.map(format_salary).unwrap_or_default(),
            manager: e.manager.clone().unwrap_or_else(|| NO_MANAGER.to_string()),
        })
        .collect()
}

pub fn to_department_employee_table(
    employees: &[DepartmentEmployee],
) -> Vec<DepartmentEmployeeTableRow> {
    employees
        .iter()
        .map(|e| DepartmentEmployeeTableRow {
            employee_id: e.id,
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            job_title: e.title.clone(),
            salary: format_salary(e.salary),
        })
        .collect()
}

/// Format an amount as dollars with thousands separators and two decimals,
/// e.g. `$90,000.00`.
#[must_use]
pub fn format_salary(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (digits, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut whole = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            whole.push(',');
        }
        whole.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${whole}.{cents}")
}
