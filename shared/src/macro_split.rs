//! Macro allocation
//!
//! Splits a daily calorie target into protein, fat, and carbohydrate grams.
//! Protein is sized first to preserve muscle under a deficit, fat takes a
//! fixed calorie share, and carbohydrates absorb the remainder so the split
//! can never exceed the calorie budget.

use crate::units::KG_PER_LB;
use serde::{Deserialize, Serialize};

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Grams of protein per pound of total bodyweight, when lean mass is unknown
pub const PROTEIN_PER_LB_TOTAL: f64 = 1.0;
/// Grams of protein per pound of lean mass, when body fat is known
pub const PROTEIN_PER_LB_LEAN: f64 = 1.2;
/// Fraction of daily calories allotted to fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// A protein/carb/fat gram split for one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroSplit {
    /// Allocate a calorie budget for a subject at the given weight.
    ///
    /// Protein targets 1.2 g/lb of lean mass when body fat is known, else
    /// 1.0 g/lb of total weight, capped at the calories left after fat so the
    /// split stays within budget even when the safety floor binds on a heavy
    /// subject. Carbs take whatever remains.
    pub fn allocate(daily_kcal: f64, weight_kg: f64, body_fat_percent: Option<f64>) -> Self {
        let fat_kcal = daily_kcal * FAT_CALORIE_SHARE;

        let protein_target_g = match body_fat_percent {
            Some(bf) => (weight_kg * (1.0 - bf / 100.0)) / KG_PER_LB * PROTEIN_PER_LB_LEAN,
            None => weight_kg / KG_PER_LB * PROTEIN_PER_LB_TOTAL,
        };
        let protein_kcal = (protein_target_g * KCAL_PER_G_PROTEIN).min(daily_kcal - fat_kcal);

        let carb_kcal = (daily_kcal - protein_kcal - fat_kcal).max(0.0);

        Self {
            protein_g: protein_kcal / KCAL_PER_G_PROTEIN,
            carbs_g: carb_kcal / KCAL_PER_G_CARBS,
            fat_g: fat_kcal / KCAL_PER_G_FAT,
        }
    }

    /// Calories implied by the gram split
    pub fn total_kcal(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fat_g * KCAL_PER_G_FAT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_allocation_without_body_fat() {
        // 90.7184 kg (200 lb), 2469.9 kcal: 200 g protein, 25% fat, carbs rest
        let split = MacroSplit::allocate(2469.9, 90.7184, None);
        assert!((split.protein_g - 200.0).abs() < 0.01);
        assert!((split.fat_g - 2469.9 * 0.25 / 9.0).abs() < 0.01);
        let expected_carbs = (2469.9 - 800.0 - 2469.9 * 0.25) / 4.0;
        assert!((split.carbs_g - expected_carbs).abs() < 0.1);
    }

    #[test]
    fn test_lean_mass_raises_protein_factor() {
        // 90 kg at 20% body fat: 72 kg lean = 158.73 lb, ×1.2 = 190.5 g
        let split = MacroSplit::allocate(2400.0, 90.0, Some(20.0));
        let lean_lbs = 72.0 / KG_PER_LB;
        assert!((split.protein_g - lean_lbs * 1.2).abs() < 0.01);
    }

    #[test]
    fn test_protein_capped_at_budget() {
        // Very heavy subject pinned at the female floor: the literal 1 g/lb
        // target would blow past the calorie budget, so protein is capped
        let split = MacroSplit::allocate(1200.0, 200.0, None);
        assert!(split.total_kcal() <= 1200.0 + 1e-9);
        assert_eq!(split.carbs_g, 0.0);
        assert!((split.protein_g * 4.0 + split.fat_g * 9.0 - 1200.0).abs() < 1e-9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// The gram split never exceeds the calorie budget
        #[test]
        fn prop_macro_sum_bounded(
            daily in 1200.0f64..4500.0,
            weight in 40.0f64..250.0,
            bf in prop::option::of(5.0f64..55.0)
        ) {
            let split = MacroSplit::allocate(daily, weight, bf);
            prop_assert!(split.total_kcal() <= daily + 1e-6);
            prop_assert!(split.protein_g >= 0.0);
            prop_assert!(split.carbs_g >= 0.0);
            prop_assert!(split.fat_g >= 0.0);
        }

        /// Fat always takes exactly its fixed calorie share
        #[test]
        fn prop_fat_share_fixed(
            daily in 1200.0f64..4500.0,
            weight in 40.0f64..250.0
        ) {
            let split = MacroSplit::allocate(daily, weight, None);
            prop_assert!((split.fat_g * 9.0 - daily * 0.25).abs() < 1e-6);
        }

        /// When the budget is comfortable, protein hits its target exactly
        #[test]
        fn prop_protein_target_met_when_affordable(
            weight in 50.0f64..100.0
        ) {
            // A generous budget relative to the weight range above
            let daily = 3500.0;
            let split = MacroSplit::allocate(daily, weight, None);
            let target_g = weight / KG_PER_LB;
            prop_assert!((split.protein_g - target_g).abs() < 1e-6);
        }
    }
}
