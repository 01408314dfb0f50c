//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that wires `roster_core` end to end.
//! - Run read-only views over the seeded demonstration roster.

use clap::{Parser, Subcommand};
use roster_core::{
    core_version, default_log_level, format_brl, init_logging, write_csv_export, EmployeeService,
    InMemoryEmployeeRepository,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Roster - employee registry for sports nuclei
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print dashboard totals and breakdowns
    Summary,

    /// List employees, optionally filtered by name, city, role or nucleus
    List {
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Save the CSV report of the (filtered) table into a directory
    Export {
        /// Target directory
        #[arg(long)]
        out: PathBuf,

        #[arg(long, default_value = "")]
        query: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("roster: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &dir.to_string_lossy()).map_err(|err| err.to_string())?;
    }

    let service = EmployeeService::with_sample_data(InMemoryEmployeeRepository::new())
        .map_err(|err| err.to_string())?;

    match cli.command {
        Command::Summary => {
            let summary = service.dashboard();
            println!("roster_core version={}", core_version());
            println!("employees={}", summary.total_employees);
            println!("nuclei={}", summary.distinct_nuclei);
            println!("cities={}", summary.distinct_cities);
            println!("total_value={}", format_brl(summary.total_value));
            for (role, count) in &summary.by_role {
                println!("role[{role}]={count}");
            }
            for (gender, count) in &summary.by_gender {
                println!("gender[{gender}]={count}");
            }
        }
        Command::List { query } => {
            for employee in service.search(&query) {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    employee.nucleus_number,
                    employee.name,
                    employee.role,
                    employee.city,
                    employee.nucleus_name
                );
            }
        }
        Command::Export { out, query } => {
            let rows = service.search(&query);
            let path = write_csv_export(&out, &rows).map_err(|err| err.to_string())?;
            println!("exported {} rows to {}", rows.len(), path.display());
        }
    }

    log::debug!("event=cli_exit module=cli status=ok");
    Ok(())
}
