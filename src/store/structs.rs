use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Roster;
use crate::errors::{with_parse_context, with_read_context, with_write_context};

/// JSON file holding the roster and bout history between runs
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roster, or an empty one if nothing has been saved yet
    pub fn load(&self) -> Result<Roster> {
        let roster = read_json_opt(&self.path)?.unwrap_or_default();
        info!("Loaded roster from store: {}", self.path.display());
        Ok(roster)
    }

    pub fn save(&self, roster: &Roster) -> Result<()> {
        write_json(&self.path, roster)?;
        info!(
            "Saved {} fencers and {} bouts to store: {}",
            roster.fencers.len(),
            roster.bouts.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Replace the stored roster with the contents of another file
    pub fn import<P: AsRef<Path>>(&self, source: P) -> Result<Roster> {
        let source = source.as_ref();
        let roster: Roster = read_json_opt(source)?
            .with_context(|| format!("Import file not found: {}", source.display()))?;

        self.save(&roster)?;
        info!("Imported roster from {}", source.display());
        Ok(roster)
    }

    /// Write the stored roster to another file
    pub fn export<P: AsRef<Path>>(&self, target: P) -> Result<Roster> {
        let target = target.as_ref();
        let roster = self.load()?;

        write_json(target, &roster)?;
        info!("Exported roster to {}", target.display());
        Ok(roster)
    }

    /// Whether anything has been saved yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        with_write_context(fs::create_dir_all(parent), path)?;
    }
    let json = serde_json::to_string_pretty(data).context("Failed to serialize roster")?;
    with_write_context(fs::write(path, json), path)
}

fn read_json_opt<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = with_read_context(fs::read_to_string(path), path)?;
    let data = with_parse_context(serde_json::from_str(&json), path)?;
    Ok(Some(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::BoutEntry;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        let ids: Vec<String> = ["Ana", "Ben", "Cleo"]
            .iter()
            .map(|n| roster.add_fencer(n).unwrap().id.clone())
            .collect();
        roster
            .add_bout(
                BoutEntry {
                    date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
                    fencer1_id: ids[0].clone(),
                    fencer2_id: ids[1].clone(),
                    referee_id: ids[2].clone(),
                    score1: 15,
                    score2: 11,
                },
                15,
            )
            .unwrap();
        roster
    }

    #[test]
    fn test_missing_store_loads_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("leaderboard.json"));

        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), Roster::default());
    }

    #[test]
    fn test_store_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("leaderboard.json"));
        let roster = sample_roster();

        store.save(&roster).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), roster);
    }

    #[test]
    fn test_saved_file_uses_front_end_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("leaderboard.json"));
        store.save(&sample_roster()).unwrap();

        let json = fs::read_to_string(store.path()).unwrap();

        assert!(json.contains("\"fencer1Id\""));
        assert!(json.contains("\"bout_date\": \"2024-04-02\""));
        assert!(json.contains("\"refereed_bouts\""));
    }

    #[test]
    fn test_import_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let source = Store::new(dir.path().join("source.json"));
        let roster = sample_roster();
        source.save(&roster).unwrap();

        let store = Store::new(dir.path().join("leaderboard.json"));
        assert_eq!(store.import(source.path()).unwrap(), roster);
        assert_eq!(store.load().unwrap(), roster);

        let exported = dir.path().join("backup.json");
        store.export(&exported).unwrap();
        assert_eq!(Store::new(&exported).load().unwrap(), roster);
    }

    #[test]
    fn test_import_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("leaderboard.json"));

        assert!(store.import(dir.path().join("absent.json")).is_err());
        assert!(!store.exists());
    }

    #[test]
    fn test_corrupt_store_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");
        fs::write(&path, "{ not json").unwrap();

        let error = Store::new(&path).load().unwrap_err();

        assert!(error.to_string().contains("Failed to parse store file"));
    }
}
