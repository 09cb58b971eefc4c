mod commands;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(author, version, about = "Projects and tasks REST API over SQLite", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Api {
        /// Host address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Database file path (defaults to TASKPAD_DB, then ~/.local/share/taskpad/taskpad.db)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Directory holding index.html and static/ (defaults to TASKPAD_WEB_ROOT, then .)
        #[arg(long)]
        web_root: Option<PathBuf>,

        /// Increase log verbosity (-v debug, -vv trace)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,

        /// Serve OpenAPI documentation at /docs
        #[arg(long)]
        docs: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Api {
            host,
            port,
            db,
            web_root,
            verbose,
            docs,
        }) => commands::api::run(host, port, db, web_root, verbose, docs).await,
        None => {
            // Show help when no command provided
            Cli::command().print_help().into_diagnostic()?;
            Ok(())
        }
    }
}
