//! CLI Adapter.

use clap::{Parser, Subcommand};
use console::style;

use crate::app::{api, logging};
use crate::domain::AppError;
use crate::domain::project_paths::DEFAULT_ENV_FILE;

const GENERATE_SUCCESS_MSG: &str = "Successfully generated config file";
const CREATE_SUCCESS_MSG: &str = "Project successfully generated";

#[derive(Parser)]
#[command(name = "django-setup")]
#[command(version)]
#[command(
    about = "Scaffold Django projects from setup.yaml or interactive answers",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write setup.yaml and its .env secret file
    #[clap(visible_alias = "g")]
    Generate {
        /// Project name (asked interactively when omitted)
        name: Option<String>,
        /// Environment file loaded before running
        #[arg(long, default_value = DEFAULT_ENV_FILE)]
        env: String,
    },
    /// Create the project: documents, folders, libraries, sources, requirements
    #[clap(visible_alias = "startproject")]
    Create {
        /// Project name (asked interactively when omitted)
        name: Option<String>,
        /// Environment file loaded before running
        #[arg(long, default_value = DEFAULT_ENV_FILE)]
        env: String,
    },
    /// Install the libraries in setup.yaml and requirements.txt
    #[clap(visible_alias = "install-dependencies")]
    Install {
        /// Project name (asked interactively when omitted)
        name: Option<String>,
        /// Environment file loaded before running
        #[arg(long, default_value = DEFAULT_ENV_FILE)]
        env: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { name, env } => run_generate(name.as_deref(), &env),
        Commands::Create { name, env } => run_create(name.as_deref(), &env),
        Commands::Install { name, env } => run_install(name.as_deref(), &env),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), style(&e).red());
        if !e.is_user_error() {
            tracing::error!(error = ?e, "internal error");
        }
        std::process::exit(1);
    }
}

fn run_generate(name: Option<&str>, env: &str) -> Result<(), AppError> {
    let outcome = api::generate(name, env)?;
    println!("{}", style(format!("✅ {}", GENERATE_SUCCESS_MSG)).green());
    for file in &outcome.files {
        println!("  Wrote {}", file);
    }
    Ok(())
}

fn run_create(name: Option<&str>, env: &str) -> Result<(), AppError> {
    let outcome = api::create(name, env)?;
    println!("{}", style(format!("✅ {}", CREATE_SUCCESS_MSG)).green());
    println!("  Created {} folder(s) and {} file(s)", outcome.directories.len(), outcome.files.len());
    let failed = outcome.install.failures().count();
    if failed > 0 {
        println!("  {} install(s) failed, rerun `django-setup install` to retry", failed);
    }
    Ok(())
}

fn run_install(name: Option<&str>, env: &str) -> Result<(), AppError> {
    let report = api::install(name, env)?;
    if report.is_clean() {
        println!("✅ Installed {} target(s)", report.outcomes.len());
    } else {
        println!(
            "⚠️  Installed {} of {} target(s)",
            report.outcomes.len() - report.failures().count(),
            report.outcomes.len()
        );
    }
    Ok(())
}
