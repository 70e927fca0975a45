use crate::config::ScoringSettings;
use crate::domain::Winner;

/// Probability that the first fencer beats the second, from the logistic curve
pub fn win_chance(rating1: f64, rating2: f64, settings: &ScoringSettings) -> f64 {
    let exponent = (rating2 - rating1) / settings.curve_constant;
    1.0 / (1.0 + 10f64.powf(exponent))
}

/// Scales rating movement by how decisive the bout was
pub fn margin_scale(margin: u32, settings: &ScoringSettings) -> f64 {
    (f64::from(margin) + settings.win_bonus) / (f64::from(settings.max_score) + settings.win_bonus)
}

/// Rating change for the first fencer. The second fencer receives the negation.
pub fn rating_delta(
    win_chance: f64,
    winner: Winner,
    margin: u32,
    settings: &ScoringSettings,
) -> f64 {
    let base = match winner {
        Winner::First => settings.base_change * (1.0 - win_chance),
        Winner::Second => settings.base_change * -win_chance,
    };
    base * margin_scale(margin, settings)
}
