use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::{Bout, Competitor, Winner};
use crate::errors::RosterError;

/// The fencers and bouts entered so far.
///
/// This is the data-entry side of the system: it enforces the rules the
/// leaderboard engine assumes but never checks (unique names, distinct
/// participants, no ties).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub fencers: Vec<Competitor>,
    #[serde(default)]
    pub bouts: Vec<Bout>,
}

/// Bout details as typed in by the user, before validation
#[derive(Debug, Clone)]
pub struct BoutEntry {
    pub date: NaiveDate,
    pub fencer1_id: String,
    pub fencer2_id: String,
    pub referee_id: String,
    pub score1: u32,
    pub score2: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_fencer(&mut self, name: &str) -> Result<&Competitor, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.name_taken(name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }

        let fencer = Competitor::new(Uuid::new_v4().to_string(), name);
        info!("Added fencer {} ({})", fencer.name, fencer.id);
        self.fencers.push(fencer);
        Ok(&self.fencers[self.fencers.len() - 1])
    }

    pub fn add_bout(&mut self, entry: BoutEntry, max_score: u32) -> Result<&Bout, RosterError> {
        self.require_fencer(&entry.fencer1_id)?;
        self.require_fencer(&entry.fencer2_id)?;
        self.require_fencer(&entry.referee_id)?;

        if entry.fencer1_id == entry.fencer2_id {
            return Err(RosterError::SameFencer);
        }
        for score in [entry.score1, entry.score2] {
            if score > max_score {
                return Err(RosterError::ScoreOutOfRange { score, max: max_score });
            }
        }
        let winner =
            Winner::from_scores(entry.score1, entry.score2).ok_or(RosterError::TiedScore)?;

        let bout = Bout {
            id: Uuid::new_v4().to_string(),
            date: entry.date,
            fencer1_id: entry.fencer1_id,
            fencer2_id: entry.fencer2_id,
            referee_id: entry.referee_id,
            score1: entry.score1,
            score2: entry.score2,
            winner,
        };
        let id = bout.id.clone();
        info!("Recorded bout {} on {}", id, bout.date);

        self.bouts.push(bout);
        self.bouts.sort_by_key(|b| b.date);

        let position = self
            .bouts
            .iter()
            .position(|b| b.id == id)
            .unwrap_or_default();
        Ok(&self.bouts[position])
    }

    /// Find a fencer by exact id, falling back to a case-insensitive name match
    pub fn find_fencer(&self, key: &str) -> Option<&Competitor> {
        self.fencers
            .iter()
            .find(|f| f.id == key)
            .or_else(|| self.fencers.iter().find(|f| names_match(&f.name, key)))
    }

    pub fn fencer_name(&self, id: &str) -> &str {
        self.fencers
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.name.as_str())
            .unwrap_or("Unknown")
    }

    fn name_taken(&self, name: &str) -> bool {
        self.fencers.iter().any(|f| names_match(&f.name, name))
    }

    fn require_fencer(&self, id: &str) -> Result<(), RosterError> {
        if self.fencers.iter().any(|f| f.id == id) {
            Ok(())
        } else {
            Err(RosterError::UnknownFencer(id.to_string()))
        }
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
