use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roster::cli::{
    DepartmentCommands, EmployeeCommands, RoleCommands, init_store, run_department_add,
    run_department_budget, run_department_delete, run_department_list, run_employee_add,
    run_employee_by_department, run_employee_by_manager, run_employee_delete, run_employee_list,
    run_employee_update_manager, run_employee_update_role, run_menu, run_role_add,
    run_role_delete, run_role_list,
};
use roster::config::{Config, DatabaseConfig};
use roster::store::SqliteStore;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Track departments, roles, and employees", long_about = None)]
struct Cli {
    /// Configuration file (default: ./roster.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file, overriding the configuration
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and its tables
    Init,

    /// Open the interactive menu (the default)
    Menu,

    /// Manage departments
    Department {
        #[command(subcommand)]
        command: DepartmentCommands,
    },

    /// Manage roles
    Role {
        #[command(subcommand)]
        command: RoleCommands,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        command: EmployeeCommands,
    },
}

fn run_init(store: &SqliteStore, config: &DatabaseConfig) -> anyhow::Result<()> {
    store.initialize()?;

    println!();
    println!("Database ready at {}", config.path.display());
    println!();

    Ok(())
}

fn shutdown(store: SqliteStore) {
    match store.close() {
        Ok(()) => info!("Database connection closed"),
        Err(e) => warn!("Failed to close the database connection: {e}"),
    }
}

fn dispatch(store: &SqliteStore, config: &DatabaseConfig, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init => run_init(store, config),
        Commands::Menu => run_menu(store),
        Commands::Department { command } => match command {
            DepartmentCommands::List { json } => run_department_list(store, json),
            DepartmentCommands::Add {
                name,
                non_interactive,
            } => run_department_add(store, name, non_interactive),
            DepartmentCommands::Budget {
                department_id,
                json,
                non_interactive,
            } => run_department_budget(store, department_id, json, non_interactive),
            DepartmentCommands::Delete {
                department_id,
                non_interactive,
                yes,
                force,
            } => run_department_delete(store, department_id, non_interactive, yes, force),
        },
        Commands::Role { command } => match command {
            RoleCommands::List { json } => run_role_list(store, json),
            RoleCommands::Add {
                title,
                salary,
                department_id,
                non_interactive,
            } => run_role_add(store, title, salary, department_id, non_interactive),
            RoleCommands::Delete {
                role_id,
                non_interactive,
                yes,
                force,
            } => run_role_delete(store, role_id, non_interactive, yes, force),
        },
        Commands::Employee { command } => match command {
            EmployeeCommands::List {
                department_id,
                json,
            } => run_employee_list(store, department_id, json),
            EmployeeCommands::Add {
                first_name,
                last_name,
                role_id,
                manager_id,
                non_interactive,
            } => run_employee_add(
                store,
                first_name,
                last_name,
                role_id,
                manager_id,
                non_interactive,
            ),
            EmployeeCommands::UpdateRole {
                employee_id,
                role_id,
                non_interactive,
            } => run_employee_update_role(store, employee_id, role_id, non_interactive),
            EmployeeCommands::UpdateManager {
                employee_id,
                manager_id,
                no_manager,
                non_interactive,
            } => run_employee_update_manager(
                store,
                employee_id,
                manager_id,
                no_manager,
                non_interactive,
            ),
            EmployeeCommands::ByManager {
                manager,
                json,
                non_interactive,
            } => run_employee_by_manager(store, manager, json, non_interactive),
            EmployeeCommands::ByDepartment {
                department_id,
                json,
                non_interactive,
            } => run_employee_by_department(store, department_id, json, non_interactive),
            EmployeeCommands::Delete {
                employee_id,
                non_interactive,
                yes,
                force,
            } => run_employee_delete(store, employee_id, non_interactive, yes, force),
        },
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("roster=warn".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.database {
        config.database.path = path;
    }

    let command = cli.command.unwrap_or(Commands::Menu);
    let store = match command {
        Commands::Init => SqliteStore::open(&config.database)?,
        _ => init_store(&config.database)?,
    };

    let result = dispatch(&store, &config.database, command);
    shutdown(store);
    result
}
