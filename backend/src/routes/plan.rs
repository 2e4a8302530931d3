//! Weight-loss plan API routes

use crate::error::ApiError;
use crate::services::plan::PlanService;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use weight_planner_shared::{
    ActivityLevel, HeightUnit, LossPace, PlanRequest, PlanResponse, WeightUnit,
};

/// Create plan routes
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(compute_plan))
        .route("/options", get(plan_options))
}

/// POST /api/v1/plan - Compute an adaptive weight-loss projection
///
/// Accepts weight/height in any supported unit; the response comes back in
/// the units the request used. Invalid input yields 422 with per-field
/// details and no computed fields.
async fn compute_plan(Json(req): Json<PlanRequest>) -> Result<Json<PlanResponse>, ApiError> {
    let response = PlanService::compute(&req)?;
    Ok(Json(response))
}

/// The wire form of an enum value, as serde serializes it
fn wire_name<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

/// Selectable activity level
#[derive(Serialize)]
pub struct ActivityOption {
    pub value: String,
    pub description: &'static str,
    pub multiplier: f64,
}

/// Selectable loss pace
#[derive(Serialize)]
pub struct PaceOption {
    pub value: String,
    pub description: &'static str,
    pub deficit_percent: f64,
}

/// Form configuration for a calculator frontend
#[derive(Serialize)]
pub struct PlanOptionsResponse {
    pub activity_levels: Vec<ActivityOption>,
    pub loss_paces: Vec<PaceOption>,
    pub weight_units: Vec<String>,
    pub height_units: Vec<String>,
}

/// GET /api/v1/plan/options - Enumerate the selectable inputs
async fn plan_options() -> Json<PlanOptionsResponse> {
    Json(PlanOptionsResponse {
        activity_levels: ActivityLevel::ALL
            .iter()
            .map(|level| ActivityOption {
                value: wire_name(level),
                description: level.description(),
                multiplier: level.multiplier(),
            })
            .collect(),
        loss_paces: LossPace::ALL
            .iter()
            .map(|pace| PaceOption {
                value: wire_name(pace),
                description: pace.description(),
                deficit_percent: pace.deficit_fraction() * 100.0,
            })
            .collect(),
        weight_units: [WeightUnit::Kg, WeightUnit::Lbs, WeightUnit::Stone]
            .iter()
            .map(wire_name)
            .collect(),
        height_units: [
            HeightUnit::Cm,
            HeightUnit::Meters,
            HeightUnit::Inches,
            HeightUnit::FeetInches,
        ]
        .iter()
        .map(wire_name)
        .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_options_enumerate_everything() {
        let Json(options) = plan_options().await;
        assert_eq!(options.activity_levels.len(), 5);
        assert_eq!(options.loss_paces.len(), 3);
        assert_eq!(options.weight_units, vec!["kg", "lbs", "stone"]);
        assert_eq!(options.height_units.len(), 4);
        assert_eq!(options.activity_levels[0].value, "sedentary");
        assert_eq!(options.loss_paces[1].deficit_percent, 15.0);
    }
}
