use anyhow::Result;
use chrono::NaiveDate;

use crate::config::settings::AppConfig;
use crate::domain::{Bout, BoutEntry, Competitor, Roster};
use crate::errors::RosterError;
use crate::store::Store;

/// Bout details where fencers may be given by name or id
#[derive(Debug, Clone)]
pub struct BoutRequest {
    pub date: NaiveDate,
    pub fencer1: String,
    pub fencer2: String,
    pub referee: String,
    pub score1: u32,
    pub score2: u32,
}

/// Records new fencers and bouts in the store
pub struct EntryService {
    store: Store,
    max_score: u32,
}

impl EntryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: Store::new(&config.store_path),
            max_score: config.scoring.max_score,
        }
    }

    pub fn add_fencer(&self, name: &str) -> Result<Competitor> {
        let mut roster = self.store.load()?;
        let fencer = roster.add_fencer(name)?.clone();
        self.store.save(&roster)?;
        Ok(fencer)
    }

    pub fn add_bout(&self, request: BoutRequest) -> Result<Bout> {
        let mut roster = self.store.load()?;
        let entry = BoutEntry {
            date: request.date,
            fencer1_id: resolve(&roster, &request.fencer1)?,
            fencer2_id: resolve(&roster, &request.fencer2)?,
            referee_id: resolve(&roster, &request.referee)?,
            score1: request.score1,
            score2: request.score2,
        };

        let bout = roster.add_bout(entry, self.max_score)?.clone();
        self.store.save(&roster)?;
        Ok(bout)
    }

    pub fn roster(&self) -> Result<Roster> {
        self.store.load()
    }

    pub fn import(&self, source: &std::path::Path) -> Result<Roster> {
        self.store.import(source)
    }

    pub fn export(&self, target: &std::path::Path) -> Result<Roster> {
        self.store.export(target)
    }
}

fn resolve(roster: &Roster, key: &str) -> Result<String, RosterError> {
    roster
        .find_fencer(key)
        .map(|f| f.id.clone())
        .ok_or_else(|| RosterError::UnknownFencer(key.to_string()))
}
