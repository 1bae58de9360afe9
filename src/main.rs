use clap::Parser;
use memomail::application::{ConfigService, MailSession, NotebookSession};
use memomail::cli::{Cli, Commands, ConfigAction};
use memomail::domain::{MailingList, Notebook};
use memomail::error::MemomailError;
use memomail::infrastructure::{Config, ConsoleMailer};
use memomail::logging;
use std::io;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MemomailError> {
    // Writing a fresh config must not depend on the current one being valid
    if let Commands::Config {
        action: Some(ConfigAction::Init { path }),
        ..
    } = &cli.command
    {
        let defaults = Config::default();
        let level = logging::effective_level(cli.log_level.as_deref(), &defaults.log_level);
        logging::init_logging(&level)?;
        ConfigService::init(path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = Config::resolve(cli.config.as_deref())?;
    let level = logging::effective_level(cli.log_level.as_deref(), &config.log_level);
    logging::init_logging(&level)?;

    match cli.command {
        Commands::Notebook => {
            let stdin = io::stdin();
            let mut session = NotebookSession::new(
                Notebook::new(),
                stdin.lock(),
                io::stdout(),
                config.date_format.clone(),
            );
            session.run()
        }
        Commands::Mail { from } => {
            let from_addr = from.unwrap_or_else(|| config.from_addr.clone());
            let stdin = io::stdin();
            let mut session = MailSession::new(
                MailingList::new(),
                stdin.lock(),
                io::stdout(),
                ConsoleMailer::new(io::stdout()),
                from_addr,
                config.headers.clone(),
            );
            session.run()
        }
        Commands::Config { key, list, .. } => {
            let service = ConfigService::new(config);
            if list {
                print!("{}", service.list());
            } else if let Some(k) = key {
                println!("{}", service.get(&k)?);
            } else {
                // No key provided, show usage
                println!("Usage: memomail config [--list | <key> | init <path>]");
                println!("Valid keys: from_addr, headers, log_level, date_format");
            }
            Ok(())
        }
    }
}
