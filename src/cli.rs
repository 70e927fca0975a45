use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "fencing club leaderboard")]
pub struct Cli {
    /// Store file holding fencers and bouts
    #[arg(long, global = true, env = "LEADERBOARD_STORE")]
    pub store: Option<PathBuf>,

    /// JSON file overriding scoring constants
    #[arg(long, global = true, env = "LEADERBOARD_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Add a fencer to the roster
    AddFencer {
        /// Display name, unique regardless of case
        name: String,
    },
    /// Record a bout result
    AddBout {
        /// First fencer (name or id)
        #[arg(long)]
        fencer1: String,
        /// Second fencer (name or id)
        #[arg(long)]
        fencer2: String,
        /// Referee (name or id)
        #[arg(long)]
        referee: String,
        #[arg(long)]
        score1: u32,
        #[arg(long)]
        score2: u32,
        /// Bout date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List fencers on the roster
    Fencers,
    /// List recorded bouts
    Bouts,
    /// Replay all bouts and print the leaderboard
    Calculate {
        /// Treat this date as today for points expiry
        #[arg(long)]
        as_of: Option<NaiveDate>,
        /// Print the leaderboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace the store with the contents of a file
    Import { path: PathBuf },
    /// Write the store to a file
    Export { path: PathBuf },
    /// Print shell completions
    Completions { shell: Shell },
}
