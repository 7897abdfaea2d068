//! Argument dispatch for the `roster` binary.
//!
//! With no subcommand the interactive menu runs; the other subcommands do one
//! operation and save straight away.

use crate::args::{Cli, Commands};
use roster::api::{self, CmdResult, ConfigAction, EmployeeUpdate, RosterApi, RosterPaths};
use roster::error::Result;
use roster::store::fs::FileStore;
use std::io::{self, Write};

mod menu;
mod print;
pub(crate) mod setup;

use menu::Menu;
use print::{print_messages, print_persons};

pub(crate) fn run(mut cli: Cli) -> Result<()> {
    let paths = setup::init_paths();

    match cli.command.take().unwrap_or(Commands::Menu) {
        Commands::Config { key, value } => handle_config(&paths, key, value),
        Commands::Menu => {
            let mut api = setup::init_session_api(&cli, &paths)?;
            handle_menu(&mut api)
        }
        Commands::List => {
            let api = setup::init_api(&cli, &paths)?;
            handle_list(&api)
        }
        Commands::Add {
            name,
            id,
            salary,
            kind,
        } => {
            let mut api = setup::init_api(&cli, &paths)?;
            let result = api.add_person(kind, name, id, salary)?;
            finish(&mut api, result)
        }
        Commands::Update {
            id,
            name,
            new_id,
            salary,
        } => {
            let mut api = setup::init_api(&cli, &paths)?;
            let result = api.update_employee(id, EmployeeUpdate::new(name, new_id, salary))?;
            finish(&mut api, result)
        }
        Commands::Delete { id } => {
            let mut api = setup::init_api(&cli, &paths)?;
            let result = api.delete_employee(id)?;
            finish(&mut api, result)
        }
    }
}

fn handle_menu(api: &mut RosterApi<FileStore>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(api, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

fn handle_list(api: &RosterApi<FileStore>) -> Result<()> {
    let result = api.list()?;
    let mut out = io::stdout().lock();
    print_messages(&mut out, api.startup_messages())?;
    print_persons(&mut out, &result.listed_persons)?;
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

/// Saves after a one-shot change and prints what happened.
fn finish(api: &mut RosterApi<FileStore>, result: CmdResult) -> Result<()> {
    let saved = api.save()?;
    let mut out = io::stdout().lock();
    print_messages(&mut out, api.startup_messages())?;
    print_messages(&mut out, &result.messages)?;
    print_messages(&mut out, &saved.messages)?;
    out.flush()?;
    Ok(())
}

fn handle_config(paths: &RosterPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api::config(paths, action)?;
    let mut out = io::stdout().lock();
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            writeln!(out, "data-file = {}", config.data_file.display())?;
            writeln!(out, "format = {}", config.format)?;
        }
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}
