pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod factories;
pub mod http;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;

use crate::api::SportradarClient;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::SqliteStore;
use crate::services::ingestion::IngestionService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let port = port.unwrap_or(config.server.port);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_sync(api_id_int: u64) -> Result<()> {
    let config = AppConfig::from_env();
    if config.source.api_key.is_empty() {
        log::warn!("SPORTRADAR_API_KEY is not set, the request will most likely be rejected");
    }

    let pool = database::open_database(&config.database.path)?;
    let source = SportradarClient::new(&config.source)?;
    let service = IngestionService::new(source, SqliteStore::new(pool));

    let runtime = tokio::runtime::Runtime::new()?;
    let player = runtime.block_on(service.sync_player(api_id_int))?;

    println!(
        "{} {} ({})",
        "Synchronized".green().bold(),
        player.name,
        player.api_id
    );
    if let Some(path) = player.view_path() {
        println!("  {}", path.cyan());
    }
    Ok(())
}

pub fn handle_reset_db() -> Result<()> {
    let config = AppConfig::from_env();
    let pool = database::create_pool(&config.database.path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::reset_database(&conn)?;
    println!("{} {}", "Reset".yellow().bold(), config.database.path);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
