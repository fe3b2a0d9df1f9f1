use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis player sync backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Fetch one player from Sportradar and store it with rankings and statistics
    Sync {
        /// Numeric Sportradar competitor id (the `<n>` in `sr:competitor:<n>`)
        api_id_int: u64,
    },
    /// Drop and recreate all tables
    ResetDb,
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}
