//! depcompare - compare the dependencies of two Node.js projects
//!
//! Reads `../<project1>/package.json` and `../<project2>/package.json` and
//! writes a Markdown report to `comparison-results.md`.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use depcompare::cli::{CliArgs, MISSING_PROJECTS_MESSAGE, USAGE};
use depcompare::config::CompareConfig;
use depcompare::orchestrator::Orchestrator;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CliArgs::parse();

    let Ok((project1, project2)) = args.project_names() else {
        eprintln!("{}", MISSING_PROJECTS_MESSAGE.red());
        println!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    match run(project1, project2) {
        Ok(output_path) => {
            println!("Comparison results written to {}", output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(project1: &str, project2: &str) -> anyhow::Result<PathBuf> {
    let orchestrator = Orchestrator::new(CompareConfig::default());
    let result = orchestrator
        .run(project1, project2)
        .with_context(|| format!("failed to compare {} and {}", project1, project2))?;
    Ok(result.output_path)
}
