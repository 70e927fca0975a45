use colored::{ColoredString, Colorize};

use crate::domain::{Competitor, Roster};

const EMPTY_LEADERBOARD: &str = "No fencers yet. Add fencers and bouts, then run `calculate`.";

/// Ranked table of the computed leaderboard
pub fn render_leaderboard(ranked: &[Competitor]) -> String {
    if ranked.is_empty() {
        return EMPTY_LEADERBOARD.to_string();
    }

    let mut lines = vec![
        format!(
            "{:>4}  {:<24} {:>8} {:>7} {:>5} {:>5} {:>6} {:>8}",
            "Rank", "Name", "Points", "Rating", "Wins", "Bouts", "Win %", "Refereed"
        )
        .bold()
        .cyan()
        .to_string(),
    ];

    for (index, fencer) in ranked.iter().enumerate() {
        let rank = index + 1;
        lines.push(format!(
            "{:>4}  {:<24} {:>8.2} {:>7.0} {:>5} {:>5} {:>6.1} {:>8}",
            rank_label(rank),
            fencer.name,
            fencer.points,
            fencer.rating,
            fencer.wins,
            fencer.bouts,
            fencer.win_percentage(),
            fencer.refereed_bouts
        ));
    }

    lines.join("\n")
}

fn rank_label(rank: usize) -> ColoredString {
    let label = rank.to_string();
    match rank {
        1 => label.yellow().bold(),
        2 => label.white().bold(),
        3 => label.red().bold(),
        _ => label.normal(),
    }
}

pub fn render_fencers(roster: &Roster) -> String {
    let mut lines = vec![
        format!("Fencers ({})", roster.fencers.len())
            .bold()
            .to_string(),
    ];
    lines.extend(
        roster
            .fencers
            .iter()
            .map(|f| format!("  {}  {}", f.name, f.id.dimmed())),
    );
    lines.join("\n")
}

pub fn render_bouts(roster: &Roster) -> String {
    let mut lines = vec![format!("Bouts ({})", roster.bouts.len()).bold().to_string()];
    for bout in &roster.bouts {
        lines.push(format!(
            "  {}  {} vs {}: {} wins {}-{} (referee: {})",
            bout.date,
            roster.fencer_name(&bout.fencer1_id),
            roster.fencer_name(&bout.fencer2_id),
            roster.fencer_name(bout.winner_id()).green(),
            bout.score1,
            bout.score2,
            roster.fencer_name(&bout.referee_id)
        ));
    }
    lines.join("\n")
}
