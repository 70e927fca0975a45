use chrono::{Local, NaiveDate};
use log::{debug, info, trace};

use super::elo::{rating_delta, win_chance};
use super::points::{Award, age_scale, award_points, months_old};
use super::table::WorkingTable;
use crate::config::ScoringSettings;
use crate::domain::{Bout, Competitor, Winner};

/// State carried from one bout to the next while replaying the history
struct FoldState {
    current_day: Option<NaiveDate>,
    table: WorkingTable,
}

/// Replays the whole bout history and returns the roster ranked by points.
///
/// Derived fields on the incoming competitors are ignored and rebuilt from
/// scratch. Bouts naming an unknown fencer or referee are skipped.
/// `today` decides how old each bout is for the points decay.
pub fn compute(
    competitors: &[Competitor],
    bouts: &[Bout],
    today: NaiveDate,
    settings: &ScoringSettings,
) -> Vec<Competitor> {
    info!(
        "Calculating leaderboard for {} fencers and {} bouts",
        competitors.len(),
        bouts.len()
    );

    let initial = FoldState {
        current_day: None,
        table: WorkingTable::from_roster(competitors, settings.initial_rating),
    };

    let final_state = sort_chronologically(bouts)
        .into_iter()
        .fold(initial, |state, bout| apply_bout(state, bout, today, settings));

    final_state.table.into_ranked()
}

/// [`compute`] against the local calendar date
pub fn compute_as_of_now(
    competitors: &[Competitor],
    bouts: &[Bout],
    settings: &ScoringSettings,
) -> Vec<Competitor> {
    compute(competitors, bouts, Local::now().date_naive(), settings)
}

fn sort_chronologically(bouts: &[Bout]) -> Vec<&Bout> {
    let mut sorted: Vec<&Bout> = bouts.iter().collect();
    sorted.sort_by_key(|b| b.date);
    sorted
}

fn apply_bout(
    state: FoldState,
    bout: &Bout,
    today: NaiveDate,
    settings: &ScoringSettings,
) -> FoldState {
    let FoldState { current_day, mut table } = state;

    let Some((rating1, rating2)) = participant_ratings(&table, bout) else {
        debug!("Skipping bout {}: unknown fencer or referee", bout.id);
        return FoldState { current_day, table };
    };

    if current_day != Some(bout.date) {
        trace!("New bout day {}", bout.date);
        table.reset_daily_bouts();
    }

    record_counts(&mut table, bout);

    let chance = win_chance(rating1, rating2, settings);
    let delta = rating_delta(chance, bout.winner, bout.score_margin(), settings);

    let (points1, points2) = match age_scale(months_old(bout.date, today), settings) {
        Some(scale) => award_bout_points(&mut table, bout, chance, scale, settings),
        None => (0.0, 0.0),
    };

    update(&mut table, &bout.fencer1_id, |f| {
        f.rating += delta;
        f.points += points1;
    });
    update(&mut table, &bout.fencer2_id, |f| {
        f.rating -= delta;
        f.points += points2;
    });

    FoldState {
        current_day: Some(bout.date),
        table,
    }
}

fn participant_ratings(table: &WorkingTable, bout: &Bout) -> Option<(f64, f64)> {
    let fencer1 = table.get(&bout.fencer1_id)?;
    let fencer2 = table.get(&bout.fencer2_id)?;
    if !table.contains(&bout.referee_id) {
        return None;
    }
    Some((fencer1.rating, fencer2.rating))
}

fn record_counts(table: &mut WorkingTable, bout: &Bout) {
    update(table, &bout.fencer1_id, |f| f.bouts += 1);
    update(table, &bout.fencer2_id, |f| f.bouts += 1);
    update(table, &bout.referee_id, |f| f.refereed_bouts += 1);
    update(table, bout.winner_id(), |f| f.wins += 1);
}

fn award_bout_points(
    table: &mut WorkingTable,
    bout: &Bout,
    chance: f64,
    scale: f64,
    settings: &ScoringSettings,
) -> (f64, f64) {
    update(table, &bout.fencer1_id, |f| f.daily_bouts += 1);
    update(table, &bout.fencer2_id, |f| f.daily_bouts += 1);

    let first = Award {
        score: bout.score1,
        won: bout.winner == Winner::First,
        daily_bouts: daily_bouts(table, &bout.fencer1_id),
        upset_weight: 1.0 - chance,
    };
    let second = Award {
        score: bout.score2,
        won: bout.winner == Winner::Second,
        daily_bouts: daily_bouts(table, &bout.fencer2_id),
        upset_weight: chance,
    };

    (
        award_points(&first, scale, settings),
        award_points(&second, scale, settings),
    )
}

fn daily_bouts(table: &WorkingTable, id: &str) -> u32 {
    table.get(id).map(|f| f.daily_bouts).unwrap_or(0)
}

fn update(table: &mut WorkingTable, id: &str, change: impl FnOnce(&mut Competitor)) {
    if let Some(competitor) = table.get_mut(id) {
        change(competitor);
    }
}
