//! Scenario setup: validate the run configuration and load the ride queue
//! into the world before the first event fires.

mod build;
mod params;

pub use build::{build_scenario, PendingRides};
pub use params::{DispatchParams, StepBudget};
