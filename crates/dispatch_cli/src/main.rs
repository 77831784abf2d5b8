use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dispatch_batch::{export_summaries_json, run_instance, run_parallel, InstanceSummary};
use dispatch_core::input::read_instance;
use dispatch_core::scenario::DispatchParams;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "dispatch",
    about = "Round-robin ride dispatch over a fixed vehicle pool",
    long_about = "Reads ride instances, assigns every ride to a vehicle round-robin,\n\
                  walks each ride under the step budget and writes one report line\n\
                  per vehicle."
)]
struct Cli {
    /// Log filter (e.g. `info`, `debug`, `dispatch_core=trace`); overrides RUST_LOG
    #[arg(long, global = true, env = "DISPATCH_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch a single instance file
    Run {
        /// Instance file to read
        input: PathBuf,
        /// Report file (defaults to the input path with an `.out` extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the per-ride step budget from the header
        #[arg(long)]
        step_limit: Option<u64>,
        /// Override the vehicle count from the header
        #[arg(long)]
        vehicles: Option<usize>,
    },
    /// Dispatch several instance files in parallel
    Batch {
        /// Instance files to read
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Directory receiving one `.out` report per instance
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
        /// Worker threads (defaults to the number of cores)
        #[arg(long)]
        threads: Option<usize>,
        /// Write a JSON summary of all successful runs to this file
        #[arg(long)]
        summary: Option<PathBuf>,
        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

// ── helpers ────────────────────────────────────────────────────────

fn enable_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("out")
}

fn instance_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

// ── commands ───────────────────────────────────────────────────────

fn run_single(
    input: &Path,
    output: Option<PathBuf>,
    step_limit: Option<u64>,
    vehicles: Option<usize>,
) -> Result<InstanceSummary> {
    let instance =
        read_instance(input).with_context(|| format!("reading {}", input.display()))?;

    let mut params = DispatchParams::from_header(&instance.header);
    if let Some(step_limit) = step_limit {
        params = params.with_step_limit(step_limit);
    }
    if let Some(vehicles) = vehicles {
        params = params.with_vehicle_count(vehicles);
    }
    params
        .validate()
        .with_context(|| format!("checking parameters for {}", input.display()))?;

    let output = output.unwrap_or_else(|| default_output(input));
    run_instance(&instance_name(input), &instance, params, &output)
        .with_context(|| format!("dispatching {}", input.display()))
}

fn run_batch(
    inputs: &[PathBuf],
    out_dir: &Path,
    threads: Option<usize>,
    summary: Option<&Path>,
    show_progress: bool,
) -> Result<Vec<InstanceSummary>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let results = run_parallel(inputs, out_dir, threads, show_progress)
        .context("building the worker thread pool")?;

    let mut summaries = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(err) => {
                failures += 1;
                error!(input = %input.display(), error = %err, "instance failed");
            }
        }
    }

    if let Some(path) = summary {
        if !summaries.is_empty() {
            export_summaries_json(&summaries, path)
                .map_err(|err| anyhow::anyhow!("writing summary {}: {err}", path.display()))?;
            info!(path = %path.display(), "summary written");
        }
    }

    if failures > 0 {
        bail!("{failures} of {} instances failed", inputs.len());
    }
    Ok(summaries)
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            input,
            output,
            step_limit,
            vehicles,
        } => {
            run_single(&input, output, step_limit, vehicles)?;
        }
        Commands::Batch {
            inputs,
            out_dir,
            threads,
            summary,
            no_progress,
        } => {
            let summaries = run_batch(
                &inputs,
                &out_dir,
                threads,
                summary.as_deref(),
                !no_progress,
            )?;
            info!(instances = summaries.len(), "batch complete");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    enable_tracing(cli.log_level.as_deref());

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
