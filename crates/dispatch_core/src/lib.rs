pub mod clock;
pub mod error;
pub mod fleet;
pub mod input;
pub mod manifest;
pub mod report;
pub mod ride;
pub mod runner;
pub mod scenario;
pub mod systems;
pub mod telemetry;
pub mod walker;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use error::DispatchError;
pub use fleet::{VehicleId, VehiclePool};
pub use manifest::{ReportLine, ResultStore};
pub use ride::{GridPoint, ProblemInstance, RideId, RideRequest};
pub use runner::dispatch_rides;
pub use walker::{walk, HaltReason, WalkOutcome};
