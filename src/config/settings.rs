use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// Tunable constants of the rating and points model.
///
/// Every field can be overridden from a JSON settings file; fields left out
/// keep their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// Rating every competitor starts each computation with.
    pub initial_rating: f64,
    /// Rating gap at which the stronger side is ten times as likely to win.
    pub curve_constant: f64,
    /// Largest rating change a single bout can cause.
    pub base_change: f64,
    /// Added to the score margin so narrow wins still move ratings.
    pub win_bonus: f64,
    /// Touches needed to win a bout.
    pub max_score: u32,
    /// Bouts this many months old (or older) no longer award points.
    pub expire_months: u32,
    /// Multiplier growth per extra bout on the same day.
    pub multiplier_amount: f64,
    pub points_bout: f64,
    pub points_win: f64,
    pub points_touch: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            initial_rating: 1000.0,
            curve_constant: 400.0,
            base_change: 32.0,
            win_bonus: 5.0,
            max_score: 15,
            expire_months: 6,
            multiplier_amount: 0.1,
            points_bout: 1.0,
            points_win: 3.0,
            points_touch: 0.2,
        }
    }
}

impl ScoringSettings {
    /// Read overrides from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        info!("Loaded scoring settings from {}", path.display());
        Ok(settings)
    }
}

pub const DEFAULT_STORE_PATH: &str = "leaderboard.json";

pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub store_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }

    /// Build the configuration from the optional paths given on the command line
    pub fn load(store_path: Option<PathBuf>, settings_path: Option<&Path>) -> Result<Self> {
        let scoring = match settings_path {
            Some(path) => ScoringSettings::from_file(path)?,
            None => ScoringSettings::default(),
        };

        Ok(Self {
            scoring,
            store_path: store_path.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
        })
    }
}
