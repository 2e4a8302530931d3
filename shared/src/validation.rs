//! Input validation for plan requests
//!
//! Scalar range checks run on canonicalized metric values, so the limits are
//! unit-independent. Non-finite numerics are rejected here, so NaN never enters
//! the formulas.

/// Map technical field names to the labels shown in validation messages
pub fn field_display_label(field: &str) -> &str {
    match field {
        "weight" => "Current Weight",
        "height" => "Height",
        "target_weight" => "Target Weight",
        "age" => "Age",
        "body_fat_percent" => "Body Fat %",
        "activity_level" => "Activity Level",
        "loss_pace" => "Loss Pace",
        "weight_unit" => "Weight Unit",
        "height_unit" => "Height Unit",
        _ => field,
    }
}

/// Weight must land in 20-500 kg once canonicalized
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if !weight_kg.is_finite() {
        return Err("must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Height must land in 50-300 cm once canonicalized
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if !height_cm.is_finite() {
        return Err("must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("must be at most 300 cm".to_string());
    }
    Ok(())
}

/// The goal must be a plausible weight strictly below the current one.
/// Violations fail the whole request up front; the simulator never sees them.
pub fn validate_target_weight_kg(target_kg: f64, current_kg: f64) -> Result<(), String> {
    if !target_kg.is_finite() {
        return Err("must be a valid number".to_string());
    }
    if target_kg < 20.0 {
        return Err("must be at least 20 kg".to_string());
    }
    if target_kg >= current_kg {
        return Err("must be below current weight".to_string());
    }
    Ok(())
}
