//! Workout plan loading
//!
//! Plans are TOML files in the configured plans directory, one plan per
//! file. The loader validates what plan editors promise upstream (non-empty
//! steps, sane set counts, rep/duration exclusivity) so the session runtime
//! can fail fast with a precise reason at entry.

mod error;
mod library;
mod loader;

pub use error::PlanError;
pub use library::PlanLibrary;
pub use loader::{load_plan_from_file, load_plans_from_dir, parse_plan, validate_plan};
