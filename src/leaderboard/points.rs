use chrono::{Datelike, NaiveDate};

use crate::config::ScoringSettings;

/// Whole calendar months between the bout and today, never negative
pub fn months_old(bout_date: NaiveDate, today: NaiveDate) -> u32 {
    let years = today.year() - bout_date.year();
    let months = years * 12 - bout_date.month0() as i32 + today.month0() as i32;
    months.max(0) as u32
}

/// Linear decay from 1.0 for a fresh bout. `None` once the bout has expired.
pub fn age_scale(months_old: u32, settings: &ScoringSettings) -> Option<f64> {
    if months_old >= settings.expire_months {
        return None;
    }
    let horizon = f64::from(settings.expire_months);
    Some((horizon - f64::from(months_old)) / horizon)
}

/// Grows with every extra bout a fencer has on the same day
pub fn same_day_multiplier(daily_bouts: u32, settings: &ScoringSettings) -> f64 {
    1.0 + f64::from(daily_bouts.saturating_sub(1)) * settings.multiplier_amount
}

/// Points before decay, multiplier and expectation weighting
pub fn base_points(score: u32, won: bool, settings: &ScoringSettings) -> f64 {
    let win = if won { settings.points_win } else { 0.0 };
    settings.points_bout + win + f64::from(score) * settings.points_touch
}

/// Inputs for one side of a bout's point award
pub struct Award {
    pub score: u32,
    pub won: bool,
    pub daily_bouts: u32,
    /// Probability that this side was expected to lose
    pub upset_weight: f64,
}

pub fn award_points(award: &Award, age_scale: f64, settings: &ScoringSettings) -> f64 {
    base_points(award.score, award.won, settings)
        * age_scale
        * same_day_multiplier(award.daily_bouts, settings)
        * award.upset_weight
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_old_ignores_day_of_month() {
        assert_eq!(months_old(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(months_old(date(2024, 1, 1), date(2024, 1, 31)), 0);
        assert_eq!(months_old(date(2023, 11, 15), date(2024, 2, 1)), 3);
    }

    #[test]
    fn test_future_bout_has_no_age() {
        assert_eq!(months_old(date(2025, 6, 1), date(2024, 2, 1)), 0);
    }

    #[test]
    fn test_age_scale_boundary() {
        let settings = ScoringSettings::default();
        let last_month = age_scale(settings.expire_months - 1, &settings).unwrap();

        assert!(last_month > 0.0);
        assert!((last_month - 1.0 / 6.0).abs() < EPS);
        assert_eq!(age_scale(0, &settings), Some(1.0));
        assert_eq!(age_scale(settings.expire_months, &settings), None);
        assert_eq!(age_scale(settings.expire_months + 10, &settings), None);
    }

    #[test]
    fn test_same_day_multiplier_rewards_repeat_bouts() {
        let settings = ScoringSettings::default();
        assert_eq!(same_day_multiplier(1, &settings), 1.0);
        assert!((same_day_multiplier(3, &settings) - 1.2).abs() < EPS);
    }

    #[test]
    fn test_base_points() {
        let settings = ScoringSettings::default();
        assert!((base_points(15, true, &settings) - 7.0).abs() < EPS);
        assert!((base_points(10, false, &settings) - 3.0).abs() < EPS);
    }

    #[test]
    fn test_award_points_combines_factors() {
        let settings = ScoringSettings::default();
        let award = Award {
            score: 15,
            won: true,
            daily_bouts: 2,
            upset_weight: 0.5,
        };

        let points = award_points(&award, 0.5, &settings);

        assert!((points - 7.0 * 0.5 * 1.1 * 0.5).abs() < EPS);
    }
}
