//! Deployment workflow installer.
//!
//! Run from the root of a git repository. With no command, `install` runs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use installer::exit_codes;
use installer::install::{InstallOptions, install};
use installer::io::config::{InstallConfig, load_config};
use installer::io::layout::NotARepositoryError;
use installer::io::templates::TemplateSource;
use installer::report::{NEXT_STEP_HINT, render_install, render_status};
use installer::status::inspect;

#[derive(Parser)]
#[command(
    name = "installer",
    version,
    about = "Scaffold a repository for the CI/CD deployment workflow"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Repository root (defaults to the current directory).
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Read templates from this directory instead of the bundled set.
    #[arg(short, long, global = true)]
    templates: Option<PathBuf>,

    /// Installer config (TOML). Defaults apply when absent.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
enum Command {
    /// Seed inputs, install hooks, copy templates, update `.gitignore`.
    Install,
    /// Report what `install` would change, without writing.
    Status,
}

fn main() {
    installer::logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = match cli.global.root {
        Some(root) => root,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let options = InstallOptions {
        templates: cli
            .global
            .templates
            .map_or(TemplateSource::Bundled, TemplateSource::Directory),
        config: match &cli.global.config {
            Some(path) => load_config(path)?,
            None => InstallConfig::default(),
        },
    };

    match cli.command.unwrap_or(Command::Install) {
        Command::Install => {
            let report = install(&root, &options)?;
            if cli.global.json {
                print_json(&report)?;
            } else {
                print!("{}", render_install(&report));
                println!();
                println!("{NEXT_STEP_HINT}");
            }
        }
        Command::Status => {
            let report = inspect(&root, &options)?;
            if cli.global.json {
                print_json(&report)?;
            } else {
                print!("{}", render_status(&report));
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize report json")?;
    println!("{payload}");
    Ok(())
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<NotARepositoryError>().is_some() {
        return exit_codes::NOT_A_REPOSITORY;
    }
    exit_codes::FAILED
}
