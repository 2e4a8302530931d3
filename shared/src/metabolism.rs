//! Metabolic rate estimation
//!
//! Converts a body snapshot into an energy-expenditure baseline. Two standard
//! formulas are supported and always reported side by side:
//!
//! - **Mifflin-St Jeor**: the reference formula, needs weight/height/age/sex
//! - **Katch-McArdle**: lean-mass based, used as the effective estimate
//!   whenever a body-fat percentage is available
//!
//! Formula selection is total and deterministic: every valid snapshot yields
//! exactly one effective BMR.

use serde::{Deserialize, Serialize};

/// Biological sex, used only to select formula coefficients and the calorie
/// safety floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Activity level for scaling BMR up to total daily expenditure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or a physical job
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Multiplier applied to BMR to estimate TDEE
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

/// The body state the estimator runs on.
///
/// The simulator owns one of these per run and re-derives it at each simulated
/// weight; only `weight_kg` changes between steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    /// When present, switches the effective BMR formula to Katch-McArdle
    pub body_fat_percent: Option<f64>,
}

impl BodySnapshot {
    /// The same subject at a different simulated weight
    pub fn at_weight(&self, weight_kg: f64) -> Self {
        Self {
            weight_kg,
            ..self.clone()
        }
    }

    /// Lean body mass, when body fat is known
    pub fn lean_mass_kg(&self) -> Option<f64> {
        self.body_fat_percent
            .map(|bf| self.weight_kg * (1.0 - bf / 100.0))
    }

    /// Fat mass, when body fat is known
    pub fn fat_mass_kg(&self) -> Option<f64> {
        self.body_fat_percent.map(|bf| self.weight_kg * bf / 100.0)
    }
}

/// Mifflin-St Jeor equation
///
/// Men: `10·w + 6.25·h − 5·age + 5`; women: `10·w + 6.25·h − 5·age − 161`
pub fn bmr_mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Katch-McArdle equation: `370 + 21.6 × lean mass (kg)`
pub fn bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_mass_kg = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_mass_kg
}

/// Both BMR estimates for one snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmrEstimate {
    pub mifflin: f64,
    /// Present only when the snapshot carries a body-fat percentage
    pub katch_mcardle: Option<f64>,
}

impl BmrEstimate {
    /// The estimate the rest of the engine runs on: Katch-McArdle when body
    /// fat is known, Mifflin-St Jeor otherwise
    pub fn effective(&self) -> f64 {
        self.katch_mcardle.unwrap_or(self.mifflin)
    }
}

/// Estimate BMR for a snapshot, computing every applicable formula
pub fn estimate_bmr(snapshot: &BodySnapshot) -> BmrEstimate {
    BmrEstimate {
        mifflin: bmr_mifflin_st_jeor(
            snapshot.weight_kg,
            snapshot.height_cm,
            snapshot.age_years,
            snapshot.sex,
        ),
        katch_mcardle: snapshot
            .body_fat_percent
            .map(|bf| bmr_katch_mcardle(snapshot.weight_kg, bf)),
    }
}

/// Total daily energy expenditure: effective BMR scaled by activity level
pub fn tdee(snapshot: &BodySnapshot) -> f64 {
    estimate_bmr(snapshot).effective() * snapshot.activity_level.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snapshot(weight_kg: f64, body_fat_percent: Option<f64>) -> BodySnapshot {
        BodySnapshot {
            weight_kg,
            height_cm: 178.0,
            age_years: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::ModeratelyActive,
            body_fat_percent,
        }
    }

    #[test]
    fn test_mifflin_reference_values() {
        // 30yo male, 90.7184 kg (200 lb), 178 cm
        let bmr = bmr_mifflin_st_jeor(90.7184, 178.0, 30, Sex::Male);
        assert!((bmr - 1874.68).abs() < 0.1);

        // 28yo female, 72.5747 kg (160 lb), 165 cm
        let bmr = bmr_mifflin_st_jeor(72.5747, 165.0, 28, Sex::Female);
        assert!((bmr - 1456.0).abs() < 0.5);
    }

    #[test]
    fn test_katch_mcardle_reference_value() {
        // 90 kg at 20% body fat: lean mass 72 kg, BMR = 370 + 21.6 * 72
        let bmr = bmr_katch_mcardle(90.0, 20.0);
        assert!((bmr - 1925.2).abs() < 0.01);
    }

    #[test]
    fn test_formula_selection() {
        let without_bf = estimate_bmr(&snapshot(90.0, None));
        assert!(without_bf.katch_mcardle.is_none());
        assert_eq!(without_bf.effective(), without_bf.mifflin);

        let with_bf = estimate_bmr(&snapshot(90.0, Some(20.0)));
        let km = with_bf.katch_mcardle.expect("body fat present");
        assert_eq!(with_bf.effective(), km);
        // Mifflin is still reported alongside
        assert!(with_bf.mifflin > 0.0);
    }

    #[test]
    fn test_tdee_scales_by_activity() {
        let snap = snapshot(90.7184, None);
        let expected = bmr_mifflin_st_jeor(90.7184, 178.0, 30, Sex::Male) * 1.55;
        assert!((tdee(&snap) - expected).abs() < 1e-9);
        assert!((tdee(&snap) - 2905.76).abs() < 0.5);
    }

    #[test]
    fn test_at_weight_changes_only_weight() {
        let snap = snapshot(90.0, Some(22.0));
        let lighter = snap.at_weight(85.0);
        assert_eq!(lighter.weight_kg, 85.0);
        assert_eq!(lighter.height_cm, snap.height_cm);
        assert_eq!(lighter.body_fat_percent, snap.body_fat_percent);
    }

    #[test]
    fn test_lean_and_fat_mass() {
        let snap = snapshot(100.0, Some(25.0));
        assert!((snap.lean_mass_kg().unwrap() - 75.0).abs() < 1e-9);
        assert!((snap.fat_mass_kg().unwrap() - 25.0).abs() < 1e-9);
        assert!(snapshot(100.0, None).lean_mass_kg().is_none());
    }

    #[test]
    fn test_activity_multipliers_are_ordered() {
        let mults: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.multiplier()).collect();
        assert!(mults.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(mults[0], 1.2);
        assert_eq!(mults[4], 1.9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Male BMR exceeds female BMR for identical stats
        #[test]
        fn prop_male_bmr_higher(
            weight in 40.0f64..200.0,
            height in 140.0f64..210.0,
            age in 13i32..120
        ) {
            let male = bmr_mifflin_st_jeor(weight, height, age, Sex::Male);
            let female = bmr_mifflin_st_jeor(weight, height, age, Sex::Female);
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }

        /// BMR falls as weight falls, holding everything else fixed. This is the
        /// feedback the adaptive simulator models
        #[test]
        fn prop_bmr_decreases_with_weight(
            w1 in 60.0f64..100.0,
            drop in 1.0f64..30.0,
            bf in prop::option::of(5.0f64..50.0)
        ) {
            let heavier = snapshot(w1 + drop, bf);
            let lighter = snapshot(w1, bf);
            prop_assert!(
                estimate_bmr(&heavier).effective() > estimate_bmr(&lighter).effective()
            );
        }

        /// TDEE is always above the effective BMR (all multipliers > 1)
        #[test]
        fn prop_tdee_above_bmr(
            weight in 40.0f64..200.0,
            bf in prop::option::of(5.0f64..50.0)
        ) {
            let snap = snapshot(weight, bf);
            prop_assert!(tdee(&snap) > estimate_bmr(&snap).effective());
        }
    }
}
