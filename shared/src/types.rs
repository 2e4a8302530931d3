//! Request and response types for the plan boundary

use crate::metabolism::{ActivityLevel, Sex};
use crate::pace::LossPace;
use crate::units::{HeightUnit, WeightUnit};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

/// A projection request as it arrives from a form or API caller.
///
/// Weight, height, and target weight are in the caller's units; the engine
/// canonicalizes to kg/cm before any math. `target_weight` shares
/// `weight_unit` with `weight`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanRequest {
    pub sex: Sex,
    #[validate(range(min = 13, max = 120, message = "must be between 13 and 120"))]
    pub age: i32,
    pub weight: f64,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    pub height: f64,
    #[serde(default)]
    pub height_unit: HeightUnit,
    pub target_weight: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub loss_pace: LossPace,
    #[validate(range(
        exclusive_min = 0.0,
        exclusive_max = 100.0,
        message = "must be between 0 and 100"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Include the metabolic breakdown section in the response
    #[serde(default = "default_true")]
    pub show_metabolic: bool,
    /// Include the body-composition section (needs a body-fat percent)
    #[serde(default = "default_true")]
    pub show_body_composition: bool,
}

/// Macro grams for the starting calorie target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Metabolic breakdown, present when `show_metabolic` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetabolicDetail {
    /// The estimate the plan runs on
    pub bmr: f64,
    /// Mifflin-St Jeor value, always reported for transparency
    pub bmr_mifflin: f64,
    /// Katch-McArdle value, when a body-fat percent was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr_katch_mcardle: Option<f64>,
    pub tdee: f64,
    pub activity_multiplier: f64,
}

/// Body-composition breakdown, present when `show_body_composition` is set
/// and a body-fat percent was supplied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCompositionDetail {
    pub body_fat_percent: f64,
    /// Lean mass in the caller's weight unit
    pub lean_mass: f64,
    /// Fat mass in the caller's weight unit
    pub fat_mass: f64,
    pub unit: String,
}

/// One chart sample, weight in the caller's unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub week: u32,
    pub weight: f64,
}

/// One row of the week-by-week plan table, in the caller's units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRow {
    pub week: u32,
    pub weight: f64,
    pub daily_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// The complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Daily intake target at the starting weight, kcal
    pub daily_calories: f64,
    /// Achieved daily deficit at the starting weight, kcal. Negative when the
    /// safety floor sits above maintenance.
    pub deficit: f64,
    /// Expected loss per week at the starting weight, in `weight_unit`
    pub weekly_loss: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub weight_unit: String,
    /// Week the target is projected to be reached; `None` when the 104-week
    /// horizon ends first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks_to_goal: Option<u32>,
    pub goal_reached: bool,
    /// True when the safety floor clamped the intake target at any point
    pub safety_floor_applied: bool,
    pub macros: MacroBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metabolic: Option<MetabolicDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_composition: Option<BodyCompositionDetail>,
    pub chart: Vec<ChartPoint>,
    pub plan: Vec<PlanRow>,
    /// Human-readable recap with the numbers substituted in
    pub summary: String,
}
