//! Weight Planner Shared Library
//!
//! The adaptive weight-loss projection engine: metabolic estimation, calorie
//! target policy, macro allocation, and the week-by-week simulator. Everything
//! in this crate is pure and deterministic (no I/O, no clocks, no shared
//! state), so the backend, the WASM bindings, and test harnesses all call the
//! same code.

pub mod errors;
pub mod macro_split;
pub mod metabolism;
pub mod pace;
pub mod plan;
pub mod projection;
pub mod types;
pub mod units;
pub mod validation;

// Re-export the engine surface callers actually use
pub use errors::*;
pub use metabolism::*;
pub use pace::*;
pub use plan::build_plan;
pub use projection::{simulate, Projection, ProjectionPoint, MAX_SIMULATED_WEEKS};
pub use types::*;
pub use units::*;
