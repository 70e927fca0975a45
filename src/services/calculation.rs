use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::Competitor;
use crate::leaderboard;
use crate::store::Store;

/// Loads the stored history and replays it into a ranked leaderboard
pub struct CalculationService {
    config: AppConfig,
    store: Store,
}

impl CalculationService {
    pub fn new(config: AppConfig) -> Self {
        let store = Store::new(&config.store_path);
        Self { config, store }
    }

    /// Compute the leaderboard as of `as_of`, or today when not given
    pub fn run(&self, as_of: Option<NaiveDate>) -> Result<Vec<Competitor>> {
        let today = as_of.unwrap_or_else(|| Local::now().date_naive());
        info!("=== Calculating leaderboard as of {} ===", today);

        let roster = self.store.load()?;
        info!(
            "  → Loaded {} fencers and {} bouts",
            roster.fencers.len(),
            roster.bouts.len()
        );

        let ranked = leaderboard::compute(
            &roster.fencers,
            &roster.bouts,
            today,
            &self.config.scoring,
        );
        log_leader(&ranked);

        Ok(ranked)
    }
}

fn log_leader(ranked: &[Competitor]) {
    if let Some(leader) = ranked.first() {
        info!("  → Leader: {} with {:.2} points", leader.name, leader.points);
    }
}
