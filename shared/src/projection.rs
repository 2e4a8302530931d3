//! Adaptive weight-loss projection
//!
//! Simulates week-by-week weight decline by re-deriving BMR, TDEE, and the
//! calorie target at each simulated weight, instead of extrapolating once from
//! the starting weight. Because expenditure shrinks as weight drops, the
//! weekly loss shrinks too and the projected curve is concave, which is the
//! difference from a naive linear projection.
//!
//! The loop is bounded: it stops when the projected weight reaches the target
//! or after 104 simulated weeks, whichever comes first. If the safety floor
//! keeps the deficit too small (or negative) the goal is simply not reached
//! within the cap; that outcome is surfaced, never extended or hidden.

use crate::macro_split::MacroSplit;
use crate::metabolism::{estimate_bmr, BodySnapshot};
use crate::pace::{CalorieTarget, LossPace};
use crate::units::KG_PER_LB;
use serde::{Deserialize, Serialize};

/// Hard cap on simulated weeks; guarantees termination even when the deficit
/// decays toward zero
pub const MAX_SIMULATED_WEEKS: u32 = 104;

/// Energy content of one pound of body fat, kcal
pub const KCAL_PER_LB_FAT: f64 = 3500.0;

/// One sampled step of the projection. Immutable once produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub week: u32,
    pub weight_kg: f64,
    pub daily_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// The full simulated trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// Ordered samples, starting with a week-0 point at the current weight
    pub points: Vec<ProjectionPoint>,
    /// Weeks advanced per step; constant for the whole run
    pub stride_weeks: u32,
    /// Whether the target weight was reached within the cap
    pub goal_reached: bool,
    /// Week the target was reached, `None` when unreached
    pub weeks_to_goal: Option<u32>,
    /// True if the safety floor clamped the target at any step
    pub floor_applied: bool,
    pub final_weight_kg: f64,
}

/// Weight lost in one week on a given calorie deficit.
///
/// Negative deficits (floor above TDEE) produce zero loss, so the projected
/// weight is non-increasing by construction.
pub fn weekly_loss_kg(deficit_kcal: f64) -> f64 {
    deficit_kcal.max(0.0) * 7.0 / KCAL_PER_LB_FAT * KG_PER_LB
}

/// Pick the fixed week stride from a naive horizon estimate. Short horizons
/// sample every week; long ones sample more sparsely. This affects output
/// density only; step arithmetic always scales by the stride.
fn pick_stride(weight_to_lose_kg: f64, initial_weekly_loss_kg: f64) -> u32 {
    if initial_weekly_loss_kg <= f64::EPSILON {
        // Degenerate stall: the curve is flat, sample sparsely
        return 4;
    }
    let naive_weeks = weight_to_lose_kg / initial_weekly_loss_kg;
    if naive_weeks <= 26.0 {
        1
    } else if naive_weeks <= 52.0 {
        2
    } else {
        4
    }
}

fn point_at(snapshot: &BodySnapshot, week: u32, target: &CalorieTarget) -> ProjectionPoint {
    let split = MacroSplit::allocate(
        target.daily_kcal,
        snapshot.weight_kg,
        snapshot.body_fat_percent,
    );
    ProjectionPoint {
        week,
        weight_kg: snapshot.weight_kg,
        daily_kcal: target.daily_kcal,
        protein_g: split.protein_g,
        carbs_g: split.carbs_g,
        fat_g: split.fat_g,
    }
}

/// Run the adaptive projection for a validated subject.
///
/// Callers must have established `target_weight_kg < subject.weight_kg`;
/// validation happens at the request boundary, never in here.
pub fn simulate(subject: &BodySnapshot, target_weight_kg: f64, pace: LossPace) -> Projection {
    debug_assert!(target_weight_kg < subject.weight_kg);

    let initial_tdee = estimate_bmr(subject).effective() * subject.activity_level.multiplier();
    let initial_target = CalorieTarget::derive(initial_tdee, pace, subject.sex);
    let stride = pick_stride(
        subject.weight_kg - target_weight_kg,
        weekly_loss_kg(initial_target.deficit_kcal),
    );

    let mut points = vec![point_at(subject, 0, &initial_target)];
    let mut floor_applied = initial_target.floor_applied;
    let mut current = subject.clone();
    let mut week = 0u32;
    let mut goal_reached = false;

    while week < MAX_SIMULATED_WEEKS && !goal_reached {
        week += stride;

        // Re-derive everything at the current simulated weight
        let tdee = estimate_bmr(&current).effective() * current.activity_level.multiplier();
        let target = CalorieTarget::derive(tdee, pace, current.sex);
        floor_applied |= target.floor_applied;

        let loss = weekly_loss_kg(target.deficit_kcal) * stride as f64;
        let next_weight = (current.weight_kg - loss).max(target_weight_kg);
        current = current.at_weight(next_weight);

        points.push(point_at(&current, week, &target));

        if next_weight <= target_weight_kg {
            goal_reached = true;
        }
    }

    Projection {
        stride_weeks: stride,
        goal_reached,
        weeks_to_goal: goal_reached.then_some(week),
        floor_applied,
        final_weight_kg: current.weight_kg,
        points,
    }
}
