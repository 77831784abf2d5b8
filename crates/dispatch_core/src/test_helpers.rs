//! Test helpers for common test setup and utilities.
//!
//! Shared fixtures so unit tests, integration tests and benches build rides
//! the same way.

use bevy_ecs::prelude::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ride::{GridPoint, RideRequest};
use crate::runner::initialize_dispatch;
use crate::scenario::{build_scenario, DispatchParams};

/// The small worked example instance: a 3x4 grid, 2 vehicles, 3 rides,
/// bonus 2, 10 steps.
pub const EXAMPLE_INSTANCE: &str = "3 4 2 3 2 10\n0 0 1 3 2 9\n1 2 1 0 0 9\n2 0 2 2 0 9\n";

/// Report expected for [EXAMPLE_INSTANCE].
pub const EXAMPLE_REPORT: &str = "2 0 2\n1 1\n";

/// A ride from the origin to `(end_x, end_y)`.
pub fn ride_to(id: usize, end_x: u32, end_y: u32) -> RideRequest {
    RideRequest::new(id, GridPoint::ORIGIN, GridPoint::new(end_x, end_y))
}

/// `count` rides numbered from zero, all heading to the same cell.
pub fn uniform_rides(count: usize, end: GridPoint) -> Vec<RideRequest> {
    (0..count)
        .map(|i| RideRequest::new(i, GridPoint::ORIGIN, end))
        .collect()
}

/// `count` rides with random pickups, dropoffs and time windows inside a
/// `rows` x `cols` grid. Deterministic for a given seed.
pub fn random_rides(seed: u64, count: usize, rows: u32, cols: u32) -> Vec<RideRequest> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = rows.max(1);
    let cols = cols.max(1);
    (0..count)
        .map(|i| {
            let start = GridPoint::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
            let end = GridPoint::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
            let earliest = rng.gen_range(0..1_000u64);
            let latest = earliest + rng.gen_range(1..1_000u64);
            RideRequest::new(i, start, end).with_window(earliest, latest)
        })
        .collect()
}

/// Renders rides as an instance file with the given pool and budget.
pub fn instance_text(vehicle_count: usize, step_limit: u64, rides: &[RideRequest]) -> String {
    let mut text = format!("100 100 {vehicle_count} {} 0 {step_limit}\n", rides.len());
    for ride in rides {
        text.push_str(&format!(
            "{} {} {} {} {} {}\n",
            ride.start.x,
            ride.start.y,
            ride.end.x,
            ride.end.y,
            ride.earliest_start,
            ride.latest_finish
        ));
    }
    text
}

/// A world with the scenario built and `DispatchStarted` queued.
///
/// # Panics
///
/// Panics if the parameters or rides are rejected.
pub fn create_test_world(params: DispatchParams, rides: &[RideRequest]) -> World {
    let mut world = World::new();
    build_scenario(&mut world, params, rides).expect("test scenario should build");
    initialize_dispatch(&mut world);
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_instance;

    #[test]
    fn random_rides_are_deterministic() {
        assert_eq!(random_rides(7, 20, 10, 10), random_rides(7, 20, 10, 10));
        assert_ne!(random_rides(7, 20, 10, 10), random_rides(8, 20, 10, 10));
    }

    #[test]
    fn instance_text_round_trips_through_parser() {
        let rides = random_rides(1, 5, 50, 50);
        let instance = parse_instance(&instance_text(3, 40, &rides)).unwrap();
        assert_eq!(instance.rides, rides);
        assert_eq!(instance.header.vehicle_count, 3);
        assert_eq!(instance.header.step_limit, 40);
    }
}
