//! Per-instance summary rows.

use std::fs::File;
use std::path::{Path, PathBuf};

use dispatch_core::runner::DispatchRun;
use dispatch_core::scenario::DispatchParams;
use serde::{Deserialize, Serialize};

/// What one instance run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceSummary {
    pub instance: String,
    pub output: PathBuf,
    pub vehicle_count: usize,
    pub step_limit: u64,
    pub rides: usize,
    pub vehicles_used: usize,
    pub walks_completed: usize,
    pub walks_budget_exhausted: usize,
    pub total_walk_steps: u64,
    pub mean_walk_steps: f64,
}

impl InstanceSummary {
    pub fn from_run(
        instance: impl Into<String>,
        output: impl Into<PathBuf>,
        params: DispatchParams,
        run: &DispatchRun,
    ) -> Self {
        Self {
            instance: instance.into(),
            output: output.into(),
            vehicle_count: params.vehicle_count,
            step_limit: params.step_limit,
            rides: run.store.total_rides(),
            vehicles_used: run.store.vehicles_used(),
            walks_completed: run.telemetry.walks_completed,
            walks_budget_exhausted: run.telemetry.walks_budget_exhausted,
            total_walk_steps: run.telemetry.total_walk_steps,
            mean_walk_steps: run.telemetry.mean_walk_steps(),
        }
    }
}

/// Writes the summaries as a pretty-printed JSON array.
pub fn export_summaries_json(
    summaries: &[InstanceSummary],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if summaries.is_empty() {
        return Err("No summaries to export".into());
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summaries)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::runner::run_dispatch;
    use dispatch_core::test_helpers::random_rides;
    use tempfile::NamedTempFile;

    fn summary() -> InstanceSummary {
        let params = DispatchParams::new(3, 10);
        let run = run_dispatch(params, &random_rides(4, 7, 10, 10)).unwrap();
        InstanceSummary::from_run("demo", "demo.out", params, &run)
    }

    #[test]
    fn summary_reflects_run() {
        let summary = summary();
        assert_eq!(summary.rides, 7);
        assert_eq!(summary.vehicles_used, 3);
        assert_eq!(
            summary.walks_completed + summary.walks_budget_exhausted,
            7
        );
    }

    #[test]
    fn exports_json_array() {
        let file = NamedTempFile::new().unwrap();
        export_summaries_json(&[summary()], file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let parsed: Vec<InstanceSummary> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].instance, "demo");
        assert!(contents.contains("walks_budget_exhausted"));
    }

    #[test]
    fn refuses_empty_export() {
        let file = NamedTempFile::new().unwrap();
        assert!(export_summaries_json(&[], file.path()).is_err());
    }
}
