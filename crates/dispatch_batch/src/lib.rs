//! Batch execution of dispatch instances.
//!
//! Runs several instance files side by side, each in its own world, writes
//! one report per instance and collects a summary row per run.
//!
//! ```no_run
//! use dispatch_batch::{export_summaries_json, run_parallel};
//!
//! let inputs: Vec<std::path::PathBuf> = vec!["a_example.in".into(), "b_should_be_easy.in".into()];
//! let outcomes = run_parallel(&inputs, "out", None, true).unwrap();
//! let summaries: Vec<_> = outcomes.into_iter().filter_map(Result::ok).collect();
//! export_summaries_json(&summaries, "out/summary.json").unwrap();
//! ```
//!
//! - [`runner`]: single-instance and parallel execution using rayon
//! - [`summary`]: per-instance summary rows and JSON export

pub mod runner;
pub mod summary;

pub use runner::{output_path_for, run_instance, run_instance_file, run_parallel};
pub use summary::{export_summaries_json, InstanceSummary};
