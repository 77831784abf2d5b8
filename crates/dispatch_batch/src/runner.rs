//! Single-instance and parallel execution using rayon.

use std::path::{Path, PathBuf};

use dispatch_core::input::read_instance;
use dispatch_core::report::write_report_file;
use dispatch_core::runner::run_dispatch;
use dispatch_core::scenario::DispatchParams;
use dispatch_core::{DispatchError, ProblemInstance};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::summary::InstanceSummary;

/// `<output_dir>/<input stem>.out`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "instance".to_string());
    output_dir.join(format!("{stem}.out"))
}

/// Dispatches an already parsed instance and writes its report to `output`.
///
/// The report is written only after the whole pass has succeeded.
pub fn run_instance(
    name: &str,
    instance: &ProblemInstance,
    params: DispatchParams,
    output: &Path,
) -> Result<InstanceSummary, DispatchError> {
    let run = run_dispatch(params, &instance.rides)?;
    write_report_file(&run.store, output)?;

    let summary = InstanceSummary::from_run(name, output, params, &run);
    info!(
        instance = name,
        rides = summary.rides,
        vehicles_used = summary.vehicles_used,
        output = %output.display(),
        "instance dispatched"
    );
    Ok(summary)
}

/// Reads `input`, dispatches it with the header's pool and budget, and
/// writes the report next to the other outputs in `output_dir`.
pub fn run_instance_file(
    input: &Path,
    output_dir: &Path,
) -> Result<InstanceSummary, DispatchError> {
    let instance = read_instance(input)?;
    let params = DispatchParams::from_header(&instance.header);
    let name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    run_instance(&name, &instance, params, &output_path_for(input, output_dir))
}

/// Runs every input concurrently.
///
/// Each instance gets its own world, so nothing is shared between runs and a
/// failing instance does not stop the others. Results come back in input order.
///
/// # Arguments
///
/// * `inputs` - Instance files to run
/// * `output_dir` - Directory receiving one `.out` report per instance
/// * `num_threads` - Optional number of threads to use. If None, uses rayon's default.
/// * `show_progress` - Whether to display a progress bar
pub fn run_parallel(
    inputs: &[PathBuf],
    output_dir: impl AsRef<Path>,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<Result<InstanceSummary, DispatchError>>, rayon::ThreadPoolBuildError> {
    let output_dir = output_dir.as_ref();
    let total = inputs.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let results: Vec<Result<InstanceSummary, DispatchError>> = pool.install(|| {
        inputs
            .par_iter()
            .map(|input| {
                let result = run_instance_file(input, output_dir);
                if let Err(err) = &result {
                    warn!(input = %input.display(), error = %err, "instance failed");
                }
                if let Some(progress_bar) = &pb {
                    progress_bar.inc(1);
                }
                result
            })
            .collect()
    });

    if let Some(progress_bar) = &pb {
        progress_bar.finish_with_message("done");
    }
    Ok(results)
}
