//! In-memory plan index

use std::path::Path;

use hashbrown::HashMap;
use tracing::info;

use cadence_types::WorkoutPlan;

use super::{PlanError, load_plans_from_dir};

/// Loaded plans indexed by id.
#[derive(Debug, Default)]
pub struct PlanLibrary {
    plans: HashMap<String, WorkoutPlan>,
}

impl PlanLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the index with the plans found in `dir`.
    pub fn load_dir(&mut self, dir: &Path) -> Result<(), PlanError> {
        let plans = load_plans_from_dir(dir)?;
        info!(count = plans.len(), dir = %dir.display(), "loaded workout plans");
        self.plans = plans.into_iter().map(|p| (p.id.clone(), p)).collect();
        Ok(())
    }

    /// Look up a plan by id; `NotFound` is the fatal session-entry failure.
    pub fn get(&self, id: &str) -> Result<&WorkoutPlan, PlanError> {
        self.plans.get(id).ok_or_else(|| PlanError::NotFound {
            id: id.to_string(),
        })
    }

    pub fn insert(&mut self, plan: WorkoutPlan) {
        self.plans.insert(plan.id.clone(), plan);
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Plans sorted by display name.
    pub fn entries(&self) -> Vec<&WorkoutPlan> {
        let mut entries: Vec<_> = self.plans.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_types::ExerciseStep;

    fn plan(id: &str, name: &str) -> WorkoutPlan {
        WorkoutPlan {
            id: id.to_string(),
            name: name.to_string(),
            steps: vec![ExerciseStep {
                name: "Squats".to_string(),
                sets: 3,
                reps: 10,
                duration_secs: 0,
                rest_secs: 60,
                order: 0,
            }],
            complete_duration_step_on_end: false,
        }
    }

    #[test]
    fn lookup_by_id() {
        let mut library = PlanLibrary::new();
        library.insert(plan("a", "Leg Day"));

        assert!(library.get("a").is_ok());
        assert!(matches!(
            library.get("missing"),
            Err(PlanError::NotFound { .. })
        ));
    }

    #[test]
    fn entries_sorted_by_name() {
        let mut library = PlanLibrary::new();
        library.insert(plan("b", "Upper Body"));
        library.insert(plan("a", "Core"));

        let names: Vec<_> = library.entries().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Core", "Upper Body"]);
    }
}
