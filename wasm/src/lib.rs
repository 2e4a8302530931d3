//! Weight Planner WASM Module
//!
//! WebAssembly bindings so the projection engine runs in the browser and a
//! calculator page can recompute instantly on every form change, using the
//! exact same code the backend serves.

use serde_json::json;
use wasm_bindgen::prelude::*;
use weight_planner_shared::{
    bmr_mifflin_st_jeor, build_plan, ActivityLevel, PlanRequest, Sex,
};

/// Compute a full weight-loss plan from a JSON request.
///
/// Returns the plan as JSON on success, or `{"error": {...}}` with per-field
/// details when the request is invalid. Never panics across the boundary.
#[wasm_bindgen]
pub fn plan_from_json(request_json: &str) -> String {
    let request: PlanRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(err) => {
            return json!({
                "error": { "code": "MALFORMED_REQUEST", "message": err.to_string() }
            })
            .to_string()
        }
    };

    match build_plan(&request) {
        Ok(response) => serde_json::to_string(&response).unwrap_or_else(|err| {
            json!({
                "error": { "code": "SERIALIZATION_ERROR", "message": err.to_string() }
            })
            .to_string()
        }),
        Err(err) => json!({
            "error": {
                "code": "INVALID_INPUT",
                "message": err.detail(),
                "fields": match err {
                    weight_planner_shared::PlanError::Validation(fields) => fields,
                },
            }
        })
        .to_string(),
    }
}

/// Mifflin-St Jeor BMR for a lightweight client-side preview
#[wasm_bindgen]
pub fn bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, is_male: bool) -> f64 {
    let sex = if is_male { Sex::Male } else { Sex::Female };
    bmr_mifflin_st_jeor(weight_kg, height_cm, age_years, sex)
}

/// TDEE preview for an activity level given as its wire name
/// (e.g. "moderately_active"). Unknown names fall back to lightly active.
#[wasm_bindgen]
pub fn tdee_preview(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_level: &str,
) -> f64 {
    let level: ActivityLevel =
        serde_json::from_value(serde_json::Value::String(activity_level.to_string()))
            .unwrap_or_default();
    bmr_mifflin(weight_kg, height_cm, age_years, is_male) * level.multiplier()
}
