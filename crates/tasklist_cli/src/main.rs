use clap::{CommandFactory, Parser};
use std::io;
use tasklist_cli::cli::{Cli, Command, list_filter};
use tasklist_cli::{input, render};
use tasklist_core::config::{Config, ConfigOverrides};
use tasklist_core::error::AppError;
use tasklist_core::task_api;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "TODO_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn print_json(value: &serde_json::Value) {
    println!("{value}");
}

fn run_command(cli: Cli) -> Result<(), AppError> {
    let Some(command) = cli.command else {
        print_help();
        return Err(AppError::invalid_input("Invalid option. Use -h for help."));
    };

    let config = Config::resolve(&ConfigOverrides {
        store_path: cli.file,
    });
    tracing::debug!(path = %config.store_path().display(), "using task store");

    match command {
        Command::Add { words } => {
            let description = input::task_description(&words, io::stdin().lock())?;
            let entry = task_api::add_task(&config, &description)?;
            if cli.json {
                print_json(&render::entry_json(&entry)?);
            } else {
                println!("{}", render::added_message(&entry.task));
            }
        }
        Command::List {
            verbose,
            pending,
            done,
        } => {
            let entries = task_api::list_tasks(&config, list_filter(pending, done))?;
            if cli.json {
                print_json(&render::entries_json(&entries)?);
            } else {
                print!(
                    "{}",
                    render::render_list(&entries, verbose, render::local_offset())?
                );
            }
        }
        Command::Done { index } => {
            let entry = task_api::complete_task(&config, index)?;
            if cli.json {
                print_json(&render::entry_json(&entry)?);
            } else {
                println!("{}", render::completed_message(&entry.task));
            }
        }
        Command::Undo { index } => {
            let entry = task_api::undo_task(&config, index)?;
            if cli.json {
                print_json(&render::entry_json(&entry)?);
            } else {
                println!("{}", render::reopened_message(&entry.task));
            }
        }
        Command::Delete { index } => {
            let entry = task_api::delete_task(&config, index)?;
            if cli.json {
                print_json(&render::entry_json(&entry)?);
            } else {
                println!("{}", render::removed_message(&entry.task));
            }
        }
        Command::Clear => {
            let removed = task_api::clear_tasks(&config)?;
            if cli.json {
                print_json(&serde_json::json!({ "removed": removed }));
            } else {
                println!("{}", render::cleared_message());
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
