use anyhow::Result;

use fencing_leaderboard::cli::{Cli, Command};
use fencing_leaderboard::config::settings::AppConfig;
use fencing_leaderboard::services::entry::BoutRequest;
use fencing_leaderboard::{
    default_bout_date, handle_add_bout, handle_add_fencer, handle_calculate, handle_completions,
    handle_export, handle_import, handle_list_bouts, handle_list_fencers, interpret, load_config,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = load_config(&cli)?;
    execute_command(cli, config)
}

fn execute_command(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Command::AddFencer { name } => handle_add_fencer(&config, &name),
        Command::AddBout {
            fencer1,
            fencer2,
            referee,
            score1,
            score2,
            date,
        } => handle_add_bout(
            &config,
            BoutRequest {
                date: date.unwrap_or_else(default_bout_date),
                fencer1,
                fencer2,
                referee,
                score1,
                score2,
            },
        ),
        Command::Fencers => handle_list_fencers(&config),
        Command::Bouts => handle_list_bouts(&config),
        Command::Calculate { as_of, json } => handle_calculate(config, as_of, json),
        Command::Import { path } => handle_import(&config, &path),
        Command::Export { path } => handle_export(&config, &path),
        Command::Completions { shell } => handle_completions(shell),
    }
}
