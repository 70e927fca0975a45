use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type CompetitorId = String;
pub type BoutId = String;

/// A fencer on the roster together with the statistics derived from the bout history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    #[serde(default)]
    pub bouts: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub daily_bouts: u32,
    #[serde(default)]
    pub refereed_bouts: u32,
}

fn default_rating() -> f64 {
    1000.0
}

impl Competitor {
    pub fn new(id: impl Into<CompetitorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bouts: 0,
            wins: 0,
            rating: default_rating(),
            points: 0.0,
            daily_bouts: 0,
            refereed_bouts: 0,
        }
    }

    /// Same identity, derived fields back at their starting values
    pub fn reset(&self, initial_rating: f64) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            bouts: 0,
            wins: 0,
            rating: initial_rating,
            points: 0.0,
            daily_bouts: 0,
            refereed_bouts: 0,
        }
    }

    pub fn win_percentage(&self) -> f64 {
        if self.bouts == 0 {
            0.0
        } else {
            f64::from(self.wins) * 100.0 / f64::from(self.bouts)
        }
    }
}

/// Which participant of a bout scored higher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Winner {
    First,
    Second,
}

impl Winner {
    pub fn from_scores(score1: u32, score2: u32) -> Option<Self> {
        match score1.cmp(&score2) {
            std::cmp::Ordering::Greater => Some(Winner::First),
            std::cmp::Ordering::Less => Some(Winner::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl TryFrom<u8> for Winner {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Winner::First),
            2 => Ok(Winner::Second),
            other => Err(format!("winner must be 1 or 2, got {}", other)),
        }
    }
}

impl From<Winner> for u8 {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::First => 1,
            Winner::Second => 2,
        }
    }
}

/// A recorded bout between two fencers, overseen by a referee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bout {
    pub id: BoutId,
    #[serde(rename = "bout_date")]
    pub date: NaiveDate,
    #[serde(rename = "fencer1Id")]
    pub fencer1_id: CompetitorId,
    #[serde(rename = "fencer2Id")]
    pub fencer2_id: CompetitorId,
    #[serde(rename = "refereeId")]
    pub referee_id: CompetitorId,
    pub score1: u32,
    pub score2: u32,
    pub winner: Winner,
}

impl Bout {
    pub fn winner_id(&self) -> &str {
        match self.winner {
            Winner::First => &self.fencer1_id,
            Winner::Second => &self.fencer2_id,
        }
    }

    pub fn score_margin(&self) -> u32 {
        self.score1.abs_diff(self.score2)
    }
}
