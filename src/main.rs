use anyhow::Result;

use tennis_player_sync::cli::Command;
use tennis_player_sync::{handle_completions, handle_reset_db, handle_serve, handle_sync, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Sync { api_id_int } => handle_sync(*api_id_int),
        Command::ResetDb => handle_reset_db(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
