//! Plan service - wraps the shared projection engine

use crate::error::ApiError;
use tracing::{debug, info};
use weight_planner_shared::{build_plan, PlanRequest, PlanResponse};

/// Weight-loss plan service
pub struct PlanService;

impl PlanService {
    /// Compute a projection for a request.
    ///
    /// Validation rejections are expected user input, logged at debug;
    /// successful computations log the outcome fields that matter for
    /// observing the service (goal reached, floor applied).
    pub fn compute(req: &PlanRequest) -> Result<PlanResponse, ApiError> {
        let response = build_plan(req).map_err(|err| {
            debug!(detail = %err.detail(), "Plan request rejected");
            ApiError::from(err)
        })?;

        info!(
            sex = ?req.sex,
            pace = ?req.loss_pace,
            goal_reached = response.goal_reached,
            floor_applied = response.safety_floor_applied,
            weeks_to_goal = ?response.weeks_to_goal,
            "Computed weight-loss plan"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use weight_planner_shared::{ActivityLevel, HeightUnit, LossPace, Sex, WeightUnit};

    fn request() -> PlanRequest {
        PlanRequest {
            sex: Sex::Male,
            age: 30,
            weight: 90.7,
            weight_unit: WeightUnit::Kg,
            height: 178.0,
            height_unit: HeightUnit::Cm,
            target_weight: 82.0,
            activity_level: ActivityLevel::ModeratelyActive,
            loss_pace: LossPace::Moderate,
            body_fat_percent: None,
            show_metabolic: true,
            show_body_composition: false,
        }
    }

    #[rstest]
    #[case(LossPace::Slow)]
    #[case(LossPace::Moderate)]
    #[case(LossPace::Aggressive)]
    fn test_compute_succeeds_at_every_pace(#[case] pace: LossPace) {
        let mut req = request();
        req.loss_pace = pace;
        let response = PlanService::compute(&req).unwrap();
        assert!(response.daily_calories > 0.0);
        assert!(!response.chart.is_empty());
    }

    #[test]
    fn test_faster_pace_cuts_deeper() {
        let mut slow = request();
        slow.loss_pace = LossPace::Slow;
        let mut aggressive = request();
        aggressive.loss_pace = LossPace::Aggressive;
        let slow_resp = PlanService::compute(&slow).unwrap();
        let aggressive_resp = PlanService::compute(&aggressive).unwrap();
        assert!(aggressive_resp.daily_calories < slow_resp.daily_calories);
        assert!(aggressive_resp.weekly_loss > slow_resp.weekly_loss);
    }

    #[test]
    fn test_compute_maps_validation_to_api_error() {
        let mut req = request();
        req.target_weight = req.weight + 5.0;
        let err = PlanService::compute(&req).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
