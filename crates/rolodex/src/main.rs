//! `rolo` - CLI for rolodex
//!
//! This binary provides the command-line interface for managing the local
//! contact directory, either through one-shot subcommands or the
//! interactive shell.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use rolodex::cli::{
    AddCommand, Cli, ClearCommand, Command, ConfigCommand, EditCommand, ListCommand,
    OutputFormat, RemoveCommand, ShowCommand,
};
use rolodex::{init_logging, Card, Config, Directory, Session, Shell, Storage, SubmitOutcome};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Add(cmd) => handle_add(open_session(&config)?, &cmd),
        Command::Edit(cmd) => handle_edit(open_session(&config)?, cmd),
        Command::Remove(cmd) => handle_remove(open_session(&config)?, &cmd),
        Command::List(cmd) => handle_list(&open_session(&config)?, &cmd),
        Command::Show(cmd) => handle_show(&open_session(&config)?, &cmd),
        Command::Clear(cmd) => handle_clear(open_session(&config)?, &cmd),
        Command::Shell => handle_shell(open_session(&config)?, &config),
        Command::Config(cmd) => handle_config(&config, &cmd),
    }
}

/// Open the configured storage and load a session over it.
fn open_session(config: &Config) -> Result<Session> {
    let storage = Storage::open(config.database_path())?;
    let directory = Directory::load(storage)?;
    Ok(Session::new(directory))
}

fn handle_add(mut session: Session, cmd: &AddCommand) -> Result<()> {
    let form = session.form_mut();
    form.name.clone_from(&cmd.name);
    form.second_name.clone_from(&cmd.surname);
    form.phone.clone_from(&cmd.phone);
    form.email.clone_from(&cmd.email);

    match session.submit()? {
        SubmitOutcome::Rejected => println!("nothing saved: every field is required"),
        SubmitOutcome::Created => println!("added {}", cmd.email),
        SubmitOutcome::Updated => println!("updated {}", cmd.email),
    }
    Ok(())
}

fn handle_edit(mut session: Session, cmd: EditCommand) -> Result<()> {
    if !session.begin_edit(&cmd.email) {
        println!("no contact stored under '{}'", cmd.email);
        return Ok(());
    }

    let form = session.form_mut();
    if let Some(name) = cmd.name {
        form.name = name;
    }
    if let Some(surname) = cmd.surname {
        form.second_name = surname;
    }
    if let Some(phone) = cmd.phone {
        form.phone = phone;
    }
    if let Some(new_email) = cmd.new_email {
        form.email = new_email;
    }

    let email = session.form().email.clone();
    match session.submit()? {
        SubmitOutcome::Rejected => println!("nothing saved: every field is required"),
        SubmitOutcome::Created | SubmitOutcome::Updated => println!("updated {email}"),
    }
    Ok(())
}

fn handle_remove(mut session: Session, cmd: &RemoveCommand) -> Result<()> {
    if session.delete(&cmd.email)? {
        println!("deleted {}", cmd.email);
    } else {
        println!("no contact stored under '{}'", cmd.email);
    }
    Ok(())
}

fn handle_list(session: &Session, cmd: &ListCommand) -> Result<()> {
    match cmd.format {
        OutputFormat::Plain => {
            if session.cards().is_empty() {
                println!("(no contacts)");
            } else {
                print!("{}", session.cards());
            }
        }
        OutputFormat::Table => print!("{}", session.cards().to_table()),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(session.directory().contacts())?
            );
        }
    }
    Ok(())
}

fn handle_show(session: &Session, cmd: &ShowCommand) -> Result<()> {
    match session.directory().get(&cmd.email) {
        Some(contact) if cmd.json => println!("{}", serde_json::to_string_pretty(contact)?),
        Some(contact) => print!("{}", Card::new(contact)),
        None => println!("no contact stored under '{}'", cmd.email),
    }
    Ok(())
}

fn handle_clear(mut session: Session, cmd: &ClearCommand) -> Result<()> {
    if !cmd.yes {
        println!(
            "This deletes all {} stored contact(s). Use --yes to confirm.",
            session.directory().len()
        );
        return Ok(());
    }

    session.clear()?;
    println!("all contacts deleted");
    Ok(())
}

fn handle_shell(session: Session, config: &Config) -> Result<()> {
    let mut shell = Shell::new(session, config.shell.prompt.clone());
    shell.run()?;
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[storage]");
                println!("  database_path: {}", config.database_path().display());
                println!();
                println!("[shell]");
                println!("  prompt:        {}", config.shell.prompt);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.clone().unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
