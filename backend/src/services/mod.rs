//! Business logic services
//!
//! Services are thin orchestration over the shared projection engine,
//! adding logging and API error mapping.

pub mod plan;

pub use plan::PlanService;
