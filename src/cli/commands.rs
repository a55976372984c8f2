use clap::Subcommand;

#[derive(Subcommand)]
pub enum DepartmentCommands {
    /// List all departments
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new department
    Add {
        /// Name for the new department
        #[arg(long)]
        name: Option<String>,

        /// Skip interactive prompts (requires --name)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Show the combined salary of everyone in a department
    Budget {
        /// Department ID
        #[arg(long)]
        department_id: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Skip interactive prompts (requires --department-id)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Delete a department
    Delete {
        /// Department ID to delete
        department_id: Option<i64>,

        /// Skip interactive prompts (requires a department ID)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt (a delete that leaves references behind still needs --force)
        #[arg(long, short = 'y')]
        yes: bool,

        /// Delete even if roles still reference the department
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum RoleCommands {
    /// List all roles with their department
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new role
    Add {
        /// Job title
        #[arg(long)]
        title: Option<String>,

        /// Yearly salary (must be positive)
        #[arg(long)]
        salary: Option<f64>,

        /// Department the role belongs to
        #[arg(long)]
        department_id: Option<i64>,

        /// Skip interactive prompts (requires --title, --salary, --department-id)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Delete a role
    Delete {
        /// Role ID to delete
        role_id: Option<i64>,

        /// Skip interactive prompts (requires a role ID)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt (a delete that leaves references behind still needs --force)
        #[arg(long, short = 'y')]
        yes: bool,

        /// Delete even if employees still hold the role
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List employees with role, department, salary, and manager
    List {
        /// Only employees whose role belongs to this department
        #[arg(long)]
        department_id: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new employee
    Add {
        /// First name
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Role ID
        #[arg(long)]
        role_id: Option<i64>,

        /// Manager's employee ID (omit for no manager)
        #[arg(long)]
        manager_id: Option<i64>,

        /// Skip interactive prompts (requires --first-name, --last-name, --role-id)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Change an employee's role
    UpdateRole {
        /// Employee ID
        #[arg(long)]
        employee_id: Option<i64>,

        /// New role ID
        #[arg(long)]
        role_id: Option<i64>,

        /// Skip interactive prompts (requires --employee-id and --role-id)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Change or clear an employee's manager
    UpdateManager {
        /// Employee ID
        #[arg(long)]
        employee_id: Option<i64>,

        /// New manager's employee ID
        #[arg(long, conflicts_with = "no_manager")]
        manager_id: Option<i64>,

        /// Remove the employee's manager
        #[arg(long)]
        no_manager: bool,

        /// Skip interactive prompts (requires --employee-id and --manager-id or --no-manager)
        #[arg(long)]
        non_interactive: bool,
    },

    /// List the employees reporting to a manager
    ByManager {
        /// Manager's full name
        #[arg(long)]
        manager: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Skip interactive prompts (requires --manager)
        #[arg(long)]
        non_interactive: bool,
    },

    /// List the employees of a department
    ByDepartment {
        /// Department ID
        #[arg(long)]
        department_id: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Skip interactive prompts (requires --department-id)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Delete an employee
    Delete {
        /// Employee ID to delete
        employee_id: Option<i64>,

        /// Skip interactive prompts (requires an employee ID)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt (a delete that leaves references behind still needs --force)
        #[arg(long, short = 'y')]
        yes: bool,

        /// Delete even if other employees report to this one
        #[arg(long)]
        force: bool,
    },
}
