//! Sequential plan execution
//!
//! Steps run strictly in plan order, one at a time, and a failing step
//! never aborts the rest: the caller always gets one result per step so a
//! multi-step request shows its full outcome even when an early step
//! failed.

use crate::StepResult;
use crate::ops::Executor;
use crate::plan::Plan;

/// Execute every step of a plan in order, collecting one result per step
///
/// An empty plan (the interpreter claimed multiple operations but supplied
/// none) produces a single explanatory failure result rather than nothing.
#[must_use]
pub fn run_plan(executor: &Executor, plan: &Plan) -> Vec<StepResult> {
    let steps = plan.steps();

    if steps.is_empty() {
        return vec![StepResult::fail("No valid operations found in the command.")];
    }

    steps.iter().map(|step| executor.execute(step)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::RecordingLauncher;
    use crate::locations::AliasTable;
    use crate::plan::Operation;
    use tempfile::tempdir;

    #[test]
    fn test_failing_step_does_not_abort_plan() {
        let dir = tempdir().unwrap();
        let aliases = AliasTable::default();
        let launcher = RecordingLauncher::new();
        let executor = Executor::new(&aliases, dir.path().to_path_buf(), &launcher);

        // Step 1 renames a nonexistent file; step 2 creates a folder
        let plan = Plan::Sequence(vec![
            Operation::Rename {
                old_name: "ghost.txt".into(),
                new_name: "renamed.txt".into(),
                location: String::new(),
            },
            Operation::CreateFolder {
                folder_name: "kept".into(),
                location: String::new(),
            },
        ]);

        let results = run_plan(&executor, &plan);

        assert_eq!(results.len(), 2);
        assert!(!results[0].succeeded);
        assert!(results[1].succeeded);
        assert!(dir.path().join("kept").is_dir());
    }

    #[test]
    fn test_single_operation_yields_one_result() {
        let dir = tempdir().unwrap();
        let aliases = AliasTable::default();
        let launcher = RecordingLauncher::new();
        let executor = Executor::new(&aliases, dir.path().to_path_buf(), &launcher);

        let plan = Plan::Single(Operation::CreateFolder {
            folder_name: "solo".into(),
            location: String::new(),
        });

        let results = run_plan(&executor, &plan);

        assert_eq!(results.len(), 1);
        assert!(results[0].succeeded);
    }

    #[test]
    fn test_empty_plan_reports_no_valid_operations() {
        let dir = tempdir().unwrap();
        let aliases = AliasTable::default();
        let launcher = RecordingLauncher::new();
        let executor = Executor::new(&aliases, dir.path().to_path_buf(), &launcher);

        let results = run_plan(&executor, &Plan::Sequence(vec![]));

        assert_eq!(results.len(), 1);
        assert!(!results[0].succeeded);
        assert!(results[0].message.contains("No valid operations"));
    }

    #[test]
    fn test_results_preserve_step_order() {
        let dir = tempdir().unwrap();
        let aliases = AliasTable::default();
        let launcher = RecordingLauncher::new();
        let executor = Executor::new(&aliases, dir.path().to_path_buf(), &launcher);

        let plan = Plan::Sequence(vec![
            Operation::CreateFolder {
                folder_name: "first".into(),
                location: String::new(),
            },
            Operation::CreateFolder {
                folder_name: "first".into(),
                location: String::new(),
            },
        ]);

        let results = run_plan(&executor, &plan);

        // Second step collides with the folder the first one created
        assert!(results[0].succeeded);
        assert!(!results[1].succeeded);
        assert!(results[1].message.contains("already exists"));
    }
}
