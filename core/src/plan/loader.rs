//! Plan file loading and validation
//!
//! One plan per TOML file:
//!
//! ```toml
//! [plan]
//! id = "full-body-a"
//! name = "Full Body A"
//! complete_duration_step_on_end = true
//!
//! [[step]]
//! name = "Push-ups"
//! sets = 3
//! reps = 12
//! rest_secs = 90
//! ```
//!
//! Steps are sorted by their `order` field after loading; files that omit it
//! keep their written order.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use cadence_types::{ExerciseStep, WorkoutPlan};

use super::PlanError;

/// On-disk plan file layout.
#[derive(Debug, Deserialize)]
struct PlanFile {
    plan: PlanHeader,
    #[serde(default, rename = "step")]
    steps: Vec<ExerciseStep>,
}

#[derive(Debug, Deserialize)]
struct PlanHeader {
    id: String,
    name: String,
    #[serde(default)]
    complete_duration_step_on_end: bool,
}

/// Parse a plan from TOML text. Does not validate; callers that accept
/// plans into a session must run `validate_plan`.
pub fn parse_plan(content: &str) -> Result<WorkoutPlan, toml::de::Error> {
    let file: PlanFile = toml::from_str(content)?;
    let mut steps = file.steps;
    steps.sort_by_key(|s| s.order);

    Ok(WorkoutPlan {
        id: file.plan.id,
        name: file.plan.name,
        steps,
        complete_duration_step_on_end: file.plan.complete_duration_step_on_end,
    })
}

/// Check the structural promises the runtime relies on.
pub fn validate_plan(plan: &WorkoutPlan) -> Result<(), PlanError> {
    let invalid = |reason: String| PlanError::InvalidPlan {
        id: plan.id.clone(),
        reason,
    };

    if plan.steps.is_empty() {
        return Err(invalid("plan has no steps".to_string()));
    }

    for step in &plan.steps {
        if step.sets < 1 {
            return Err(invalid(format!("step '{}' has zero sets", step.name)));
        }
        if step.reps == 0 && step.duration_secs == 0 {
            return Err(invalid(format!(
                "step '{}' has neither reps nor duration",
                step.name
            )));
        }
        if step.reps > 0 && step.duration_secs > 0 {
            return Err(invalid(format!(
                "step '{}' has both reps and duration",
                step.name
            )));
        }
    }

    Ok(())
}

/// Load and validate a single plan file.
pub fn load_plan_from_file(path: &Path) -> Result<WorkoutPlan, PlanError> {
    let content = fs::read_to_string(path).map_err(|source| PlanError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let plan = parse_plan(&content).map_err(|source| PlanError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;

    validate_plan(&plan)?;
    Ok(plan)
}

/// Load every `.toml` plan in a directory. Files that fail to load are
/// logged and skipped so one broken plan does not hide the rest.
pub fn load_plans_from_dir(dir: &Path) -> Result<Vec<WorkoutPlan>, PlanError> {
    let entries = fs::read_dir(dir).map_err(|source| PlanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut plans = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "toml") {
            continue;
        }
        match load_plan_from_file(&path) {
            Ok(plan) => plans.push(plan),
            Err(err) => warn!(path = %path.display(), error = %err, "skipping plan file"),
        }
    }

    plans.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_types::ExerciseStep;

    const PLAN_TOML: &str = r#"
        [plan]
        id = "full-body-a"
        name = "Full Body A"
        complete_duration_step_on_end = true

        [[step]]
        name = "Plank"
        sets = 2
        duration_secs = 45
        rest_secs = 30
        order = 1

        [[step]]
        name = "Push-ups"
        sets = 3
        reps = 12
        rest_secs = 90
        order = 0
    "#;

    fn rep_step(name: &str, reps: u32, duration: u32) -> ExerciseStep {
        ExerciseStep {
            name: name.to_string(),
            sets: 3,
            reps,
            duration_secs: duration,
            rest_secs: 60,
            order: 0,
        }
    }

    #[test]
    fn parses_and_orders_steps() {
        let plan = parse_plan(PLAN_TOML).unwrap();
        assert_eq!(plan.id, "full-body-a");
        assert!(plan.complete_duration_step_on_end);
        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[0].name, "Push-ups");
        assert_eq!(plan.steps[1].name, "Plank");
        assert!(validate_plan(&plan).is_ok());
    }

    #[test]
    fn rejects_empty_plan() {
        let plan = WorkoutPlan {
            id: "empty".to_string(),
            name: "Empty".to_string(),
            steps: Vec::new(),
            complete_duration_step_on_end: false,
        };
        assert!(matches!(
            validate_plan(&plan),
            Err(PlanError::InvalidPlan { .. })
        ));
    }

    #[test]
    fn rejects_step_with_neither_reps_nor_duration() {
        let plan = WorkoutPlan {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            steps: vec![rep_step("Mystery", 0, 0)],
            complete_duration_step_on_end: false,
        };
        assert!(validate_plan(&plan).is_err());
    }

    #[test]
    fn rejects_step_with_both_reps_and_duration() {
        let plan = WorkoutPlan {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            steps: vec![rep_step("Greedy", 10, 30)],
            complete_duration_step_on_end: false,
        };
        assert!(validate_plan(&plan).is_err());
    }
}
