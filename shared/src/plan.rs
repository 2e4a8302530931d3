//! The plan boundary: one pure function from request to result
//!
//! `build_plan` validates and canonicalizes a request, runs the estimator,
//! policy, and simulator, and re-expresses everything in the caller's units.
//! It is deterministic and side-effect free; identical requests produce
//! identical responses, so any caller (HTTP handler, WASM binding, or test
//! harness) can invoke it without coordination.

use crate::errors::{FieldError, PlanError};
use crate::macro_split::MacroSplit;
use crate::metabolism::{estimate_bmr, BodySnapshot};
use crate::pace::{safety_floor_kcal, CalorieTarget};
use crate::projection::{simulate, weekly_loss_kg, MAX_SIMULATED_WEEKS};
use crate::types::{
    BodyCompositionDetail, ChartPoint, MacroBreakdown, MetabolicDetail, PlanRequest, PlanResponse,
    PlanRow,
};
use crate::units::{UnitPreferences, WeightUnit};
use crate::validation::{validate_height_cm, validate_target_weight_kg, validate_weight_kg};
use validator::Validate;

fn round0(value: f64) -> f64 {
    value.round()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Collect every validation failure for a request. Returns an empty list for
/// a valid request.
fn validate_request(
    req: &PlanRequest,
    weight_kg: f64,
    height_cm: f64,
    target_kg: f64,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // Derive-level scalar checks (age, body-fat bounds)
    if let Err(derive_errors) = req.validate() {
        for (field, field_errors) in derive_errors.field_errors() {
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                errors.push(FieldError::new(field, message));
            }
        }
    }

    // Canonical-value checks, unit-independent
    if let Err(message) = validate_weight_kg(weight_kg) {
        errors.push(FieldError::new("weight", message));
    }
    if let Err(message) = validate_height_cm(height_cm) {
        errors.push(FieldError::new("height", message));
    }
    if let Err(message) = validate_target_weight_kg(target_kg, weight_kg) {
        errors.push(FieldError::new("target_weight", message));
    }

    // Deterministic ordering regardless of hash-map iteration
    errors.sort_by(|a, b| a.field.cmp(&b.field));
    errors
}

/// Display-unit values the summary template interpolates
struct SummaryArgs {
    daily_kcal: f64,
    deficit_kcal: f64,
    weekly_loss: f64,
    target_weight: f64,
    final_weight: f64,
    unit: WeightUnit,
    floor_kcal: f64,
}

fn render_summary(args: &SummaryArgs, projection: &crate::projection::Projection) -> String {
    let mut summary = format!(
        "Eating about {:.0} kcal per day puts you {:.0} kcal below maintenance, \
         for an expected loss of about {} {} per week at first.",
        args.daily_kcal,
        args.deficit_kcal.max(0.0),
        args.weekly_loss,
        args.unit
    );

    match (projection.goal_reached, projection.weeks_to_goal) {
        (true, Some(weeks)) => summary.push_str(&format!(
            " At that rate you reach {} {} in about {} weeks.",
            args.target_weight, args.unit, weeks
        )),
        _ => summary.push_str(&format!(
            " The target of {} {} is not reached within {} weeks; the projection ends at {} {}.",
            args.target_weight, args.unit, MAX_SIMULATED_WEEKS, args.final_weight, args.unit
        )),
    }

    if projection.floor_applied {
        summary.push_str(&format!(
            " Daily intake is held at the {:.0} kcal safety minimum.",
            args.floor_kcal
        ));
    }

    summary
}

/// Compute a complete weight-loss plan for a request.
///
/// Invalid input returns `PlanError::Validation` with every rejected field
/// and no computed output. Valid input always produces a full response; a
/// goal the simulation cannot reach within its 104-week horizon is reported
/// through `goal_reached`/`weeks_to_goal`, not an error.
pub fn build_plan(req: &PlanRequest) -> Result<PlanResponse, PlanError> {
    let units = UnitPreferences {
        weight: req.weight_unit,
        height: req.height_unit,
    };
    let weight_kg = units.weight.to_kg(req.weight);
    let height_cm = units.height.to_cm(req.height);
    let target_kg = units.weight.to_kg(req.target_weight);

    let errors = validate_request(req, weight_kg, height_cm, target_kg);
    if !errors.is_empty() {
        return Err(PlanError::Validation(errors));
    }

    let subject = BodySnapshot {
        weight_kg,
        height_cm,
        age_years: req.age,
        sex: req.sex,
        activity_level: req.activity_level,
        body_fat_percent: req.body_fat_percent,
    };

    let estimate = estimate_bmr(&subject);
    let tdee_kcal = estimate.effective() * req.activity_level.multiplier();
    let calorie_target = CalorieTarget::derive(tdee_kcal, req.loss_pace, req.sex);
    let split = MacroSplit::allocate(calorie_target.daily_kcal, weight_kg, req.body_fat_percent);
    let projection = simulate(&subject, target_kg, req.loss_pace);

    let weekly_loss = round2(
        units
            .weight
            .from_kg(weekly_loss_kg(calorie_target.deficit_kcal)),
    );

    let metabolic = req.show_metabolic.then(|| MetabolicDetail {
        bmr: round0(estimate.effective()),
        bmr_mifflin: round0(estimate.mifflin),
        bmr_katch_mcardle: estimate.katch_mcardle.map(round0),
        tdee: round0(tdee_kcal),
        activity_multiplier: req.activity_level.multiplier(),
    });

    let body_composition = if req.show_body_composition {
        match (
            req.body_fat_percent,
            subject.lean_mass_kg(),
            subject.fat_mass_kg(),
        ) {
            (Some(bf), Some(lean_kg), Some(fat_kg)) => Some(BodyCompositionDetail {
                body_fat_percent: bf,
                lean_mass: round1(units.weight.from_kg(lean_kg)),
                fat_mass: round1(units.weight.from_kg(fat_kg)),
                unit: units.weight.to_string(),
            }),
            _ => None,
        }
    } else {
        None
    };

    let chart: Vec<ChartPoint> = projection
        .points
        .iter()
        .map(|p| ChartPoint {
            week: p.week,
            weight: round1(units.weight.from_kg(p.weight_kg)),
        })
        .collect();

    let plan: Vec<PlanRow> = projection
        .points
        .iter()
        .skip(1)
        .map(|p| PlanRow {
            week: p.week,
            weight: round1(units.weight.from_kg(p.weight_kg)),
            daily_calories: round0(p.daily_kcal),
            protein_g: round0(p.protein_g),
            carbs_g: round0(p.carbs_g),
            fat_g: round0(p.fat_g),
        })
        .collect();

    let target_weight_display = round1(units.weight.from_kg(target_kg));
    let final_weight_display = round1(units.weight.from_kg(projection.final_weight_kg));

    let summary = render_summary(
        &SummaryArgs {
            daily_kcal: calorie_target.daily_kcal,
            deficit_kcal: calorie_target.deficit_kcal,
            weekly_loss,
            target_weight: target_weight_display,
            final_weight: final_weight_display,
            unit: units.weight,
            floor_kcal: safety_floor_kcal(req.sex),
        },
        &projection,
    );

    Ok(PlanResponse {
        daily_calories: round0(calorie_target.daily_kcal),
        deficit: round0(calorie_target.deficit_kcal),
        weekly_loss,
        current_weight: round1(units.weight.from_kg(weight_kg)),
        target_weight: target_weight_display,
        weight_unit: units.weight.to_string(),
        weeks_to_goal: projection.weeks_to_goal,
        goal_reached: projection.goal_reached,
        safety_floor_applied: projection.floor_applied,
        macros: MacroBreakdown {
            protein_g: round0(split.protein_g),
            carbs_g: round0(split.carbs_g),
            fat_g: round0(split.fat_g),
        },
        metabolic,
        body_composition,
        chart,
        plan,
        summary,
    })
}
