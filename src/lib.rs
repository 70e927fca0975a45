pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod leaderboard;
pub mod services;
pub mod store;

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::config::settings::AppConfig;
use crate::services::calculation::CalculationService;
use crate::services::entry::{BoutRequest, EntryService};
use crate::services::report;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    AppConfig::load(cli.store.clone(), cli.settings.as_deref())
}

pub fn handle_add_fencer(config: &AppConfig, name: &str) -> Result<()> {
    let fencer = EntryService::new(config).add_fencer(name)?;
    println!("Added fencer {} ({})", fencer.name, fencer.id);
    Ok(())
}

pub fn handle_add_bout(config: &AppConfig, request: BoutRequest) -> Result<()> {
    let service = EntryService::new(config);
    let bout = service.add_bout(request)?;
    let roster = service.roster()?;
    println!(
        "Recorded bout on {}: {} wins {}-{}",
        bout.date,
        roster.fencer_name(bout.winner_id()),
        bout.score1,
        bout.score2
    );
    Ok(())
}

pub fn handle_list_fencers(config: &AppConfig) -> Result<()> {
    let roster = EntryService::new(config).roster()?;
    println!("{}", report::render_fencers(&roster));
    Ok(())
}

pub fn handle_list_bouts(config: &AppConfig) -> Result<()> {
    let roster = EntryService::new(config).roster()?;
    println!("{}", report::render_bouts(&roster));
    Ok(())
}

pub fn handle_calculate(config: AppConfig, as_of: Option<NaiveDate>, json: bool) -> Result<()> {
    let ranked = CalculationService::new(config).run(as_of)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("{}", report::render_leaderboard(&ranked));
    }
    Ok(())
}

pub fn handle_import(config: &AppConfig, path: &Path) -> Result<()> {
    let roster = EntryService::new(config).import(path)?;
    println!(
        "Imported {} fencers and {} bouts",
        roster.fencers.len(),
        roster.bouts.len()
    );
    Ok(())
}

pub fn handle_export(config: &AppConfig, path: &Path) -> Result<()> {
    let roster = EntryService::new(config).export(path)?;
    println!(
        "Exported {} fencers and {} bouts to {}",
        roster.fencers.len(),
        roster.bouts.len(),
        path.display()
    );
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

/// Date recorded for a bout entered without one
pub fn default_bout_date() -> NaiveDate {
    let today = Local::now().date_naive();
    info!("No bout date given, using {}", today);
    today
}
