//! Deficit and safety-floor policy
//!
//! Turns a TDEE plus a pace selection into the actual daily calorie target.
//! The nominal deficit is a fixed fraction of TDEE, but the target never drops
//! below a sex-specific medical floor; when the floor binds, the achieved
//! deficit is recomputed from the clamped target rather than assumed.

use crate::metabolism::Sex;
use serde::{Deserialize, Serialize};

/// Minimum daily intake for men, kcal
pub const MALE_SAFETY_FLOOR_KCAL: f64 = 1500.0;
/// Minimum daily intake for women, kcal
pub const FEMALE_SAFETY_FLOOR_KCAL: f64 = 1200.0;

/// The medical safety floor for a subject
pub fn safety_floor_kcal(sex: Sex) -> f64 {
    match sex {
        Sex::Male => MALE_SAFETY_FLOOR_KCAL,
        Sex::Female => FEMALE_SAFETY_FLOOR_KCAL,
    }
}

/// How aggressively to cut calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LossPace {
    Slow,
    #[default]
    Moderate,
    Aggressive,
}

impl LossPace {
    pub const ALL: [LossPace; 3] = [LossPace::Slow, LossPace::Moderate, LossPace::Aggressive];

    /// Nominal deficit as a fraction of TDEE
    pub fn deficit_fraction(&self) -> f64 {
        match self {
            LossPace::Slow => 0.10,
            LossPace::Moderate => 0.15,
            LossPace::Aggressive => 0.20,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LossPace::Slow => "Gentle 10% deficit, easiest to sustain",
            LossPace::Moderate => "Balanced 15% deficit",
            LossPace::Aggressive => "Steep 20% deficit, fastest results",
        }
    }
}

/// The daily calorie target derived for one step
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalorieTarget {
    /// What the subject should eat, kcal/day
    pub daily_kcal: f64,
    /// `tdee − daily_kcal`. Negative when the floor sits above TDEE; the
    /// simulator treats that as zero weight change.
    pub deficit_kcal: f64,
    /// True when the nominal target fell below the safety floor and was
    /// clamped up to it
    pub floor_applied: bool,
}

impl CalorieTarget {
    /// Apply the pace's deficit to a TDEE, enforcing the safety floor
    pub fn derive(tdee: f64, pace: LossPace, sex: Sex) -> Self {
        let floor = safety_floor_kcal(sex);
        let raw_target = tdee * (1.0 - pace.deficit_fraction());
        let floor_applied = raw_target < floor;
        let daily_kcal = raw_target.max(floor);
        Self {
            daily_kcal,
            deficit_kcal: tdee - daily_kcal,
            floor_applied,
        }
    }
}
