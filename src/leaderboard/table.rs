use std::collections::HashMap;

use crate::domain::{Competitor, CompetitorId};

/// Per-run copy of the roster, keyed by id and kept in roster order
#[derive(Debug, Clone, Default)]
pub struct WorkingTable {
    entries: Vec<Competitor>,
    index: HashMap<CompetitorId, usize>,
}

impl WorkingTable {
    /// Copy the roster with every derived field reset.
    ///
    /// A repeated id overwrites the earlier entry but keeps its position.
    pub fn from_roster(competitors: &[Competitor], initial_rating: f64) -> Self {
        let mut table = Self::default();
        for competitor in competitors {
            table.insert(competitor.reset(initial_rating));
        }
        table
    }

    fn insert(&mut self, competitor: Competitor) {
        match self.index.get(&competitor.id) {
            Some(&position) => self.entries[position] = competitor,
            None => {
                self.index.insert(competitor.id.clone(), self.entries.len());
                self.entries.push(competitor);
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Competitor> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Competitor> {
        self.index.get(id).map(|&position| &mut self.entries[position])
    }

    pub fn reset_daily_bouts(&mut self) {
        for competitor in &mut self.entries {
            competitor.daily_bouts = 0;
        }
    }

    /// Highest points first; ties stay in roster order
    pub fn into_ranked(self) -> Vec<Competitor> {
        let mut ranked = self.entries;
        ranked.sort_by(|a, b| b.points.total_cmp(&a.points));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fencer(id: &str, name: &str) -> Competitor {
        Competitor::new(id, name)
    }

    #[test]
    fn test_from_roster_resets_derived_fields() {
        let mut stale = fencer("a", "Ana");
        stale.points = 42.0;
        stale.rating = 1234.0;
        stale.daily_bouts = 3;
        stale.refereed_bouts = 8;

        let table = WorkingTable::from_roster(&[stale], 1000.0);
        let fresh = table.get("a").unwrap();

        assert_eq!(fresh.points, 0.0);
        assert_eq!(fresh.rating, 1000.0);
        assert_eq!(fresh.daily_bouts, 0);
        assert_eq!(fresh.refereed_bouts, 0);
    }

    #[test]
    fn test_duplicate_id_keeps_first_position_last_contents() {
        let roster = vec![fencer("a", "Ana"), fencer("b", "Ben"), fencer("a", "Anastasia")];

        let table = WorkingTable::from_roster(&roster, 1000.0);
        let ranked = table.into_ranked();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Anastasia");
        assert_eq!(ranked[1].name, "Ben");
    }

    #[test]
    fn test_into_ranked_is_stable_on_ties() {
        let roster = vec![fencer("a", "Ana"), fencer("b", "Ben"), fencer("c", "Cleo")];
        let mut table = WorkingTable::from_roster(&roster, 1000.0);
        table.get_mut("c").unwrap().points = 5.0;

        let names: Vec<String> = table.into_ranked().into_iter().map(|c| c.name).collect();

        assert_eq!(names, vec!["Cleo", "Ana", "Ben"]);
    }

    #[test]
    fn test_reset_daily_bouts_touches_everyone() {
        let roster = vec![fencer("a", "Ana"), fencer("b", "Ben")];
        let mut table = WorkingTable::from_roster(&roster, 1000.0);
        table.get_mut("a").unwrap().daily_bouts = 2;
        table.get_mut("b").unwrap().daily_bouts = 1;

        table.reset_daily_bouts();

        assert_eq!(table.get("a").unwrap().daily_bouts, 0);
        assert_eq!(table.get("b").unwrap().daily_bouts, 0);
    }
}
