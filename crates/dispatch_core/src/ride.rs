//! Ride requests and the problem instance they arrive in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a ride in the input stream; doubles as its identifier in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RideId(pub usize);

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cell on the rectangular city grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    pub const ORIGIN: GridPoint = GridPoint { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One point-to-point ride request.
///
/// `earliest_start` and `latest_finish` are carried for fidelity with the
/// input format; dispatch does not read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideRequest {
    pub id: RideId,
    pub start: GridPoint,
    pub end: GridPoint,
    pub earliest_start: u64,
    pub latest_finish: u64,
}

impl RideRequest {
    pub fn new(id: usize, start: GridPoint, end: GridPoint) -> Self {
        Self {
            id: RideId(id),
            start,
            end,
            earliest_start: 0,
            latest_finish: 0,
        }
    }

    pub fn with_window(mut self, earliest_start: u64, latest_finish: u64) -> Self {
        self.earliest_start = earliest_start;
        self.latest_finish = latest_finish;
        self
    }
}

/// First line of an instance file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceHeader {
    pub grid_rows: u32,
    pub grid_cols: u32,
    pub vehicle_count: usize,
    pub ride_count: usize,
    /// Per-ride bonus for on-time starts. Accepted but never applied.
    pub bonus: u64,
    pub step_limit: u64,
}

/// A parsed instance: header plus rides in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub header: InstanceHeader,
    pub rides: Vec<RideRequest>,
}
