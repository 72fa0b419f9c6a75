use clap::{Parser, Subcommand};
use score_core::AppConfig;
use score_domain::{Features, RowId, ScoreDelta};
use score_persistence::{JsonFileStore, RowRepository};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "Keep score for a list of players", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")")
)]
pub struct Cli {
    /// Directory for saved rows (or set SCOREBOARD_DATA_DIR env var)
    #[arg(long, value_name = "DIR", env = "SCOREBOARD_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep rows in memory only; nothing is read or written
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Plain name list without scores
    #[arg(long, global = true)]
    pub no_scores: bool,

    /// Storage key the rows are saved under
    #[arg(long, value_name = "KEY", global = true)]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a player to the end of the list
    Add { text: String },
    /// List all players in order
    List,
    /// Get a single player
    Get {
        #[arg(long)]
        id: RowId,
    },
    /// Delete a player
    Delete {
        #[arg(long)]
        id: RowId,
    },
    /// Change a player's score by +1, +10, -1 or -10
    Adjust {
        #[arg(long)]
        id: RowId,
        #[arg(long, allow_hyphen_values = true)]
        delta: ScoreDelta,
    },
    /// Set every score back to zero
    Reset,
    /// Move a player to a new position (0-based)
    Move {
        #[arg(long)]
        id: RowId,
        #[arg(long)]
        position: usize,
    },
    /// Put the players in the given id order
    Reorder {
        #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
        ids: Vec<RowId>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Config values with command-line flags applied on top.
    pub fn features(&self, config: &AppConfig) -> Features {
        let configured = Features::from_config(config);
        Features {
            scoring: configured.scoring && !self.no_scores,
            persistence: configured.persistence && !self.no_persist,
        }
    }

    /// Plain stderr logging would draw over the terminal UI, so only
    /// subcommands get it.
    pub fn logs_to_stderr(&self) -> bool {
        self.command.is_some()
    }

    /// `None` when persistence is off for this run.
    pub fn repository(&self, config: &AppConfig, features: Features) -> Option<RowRepository> {
        if !features.persistence {
            return None;
        }
        let dir = self
            .data_dir
            .clone()
            .unwrap_or_else(|| config.effective_data_dir());
        let key = self
            .key
            .clone()
            .unwrap_or_else(|| config.effective_storage_key().to_string());

        Some(RowRepository::new(Arc::new(JsonFileStore::new(dir)), key))
    }
}
