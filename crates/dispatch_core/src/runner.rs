//! Dispatch runner: advances the clock and routes events into the ECS.
//!
//! Each step pops the next event from [SimulationClock], inserts it as
//! [CurrentEvent], then runs the schedule. A pass is one `DispatchStarted`,
//! one `RideRequested` per ride in input order, and one `DispatchFinished`.

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;
use tracing::instrument;

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::error::DispatchError;
use crate::manifest::ResultStore;
use crate::ride::RideRequest;
use crate::scenario::{build_scenario, DispatchParams};
use crate::systems::{
    dispatch::dispatch_system,
    lifecycle::{dispatch_finished_system, dispatch_started_system},
};
use crate::telemetry::DispatchTelemetry;

fn is_dispatch_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::DispatchStarted)
        .unwrap_or(false)
}

fn is_ride_requested(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::RideRequested)
        .unwrap_or(false)
}

fn is_dispatch_finished(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::DispatchFinished)
        .unwrap_or(false)
}

/// Runs one step. Returns `false` once the clock is empty.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    let event = match world.resource_mut::<SimulationClock>().pop_next() {
        Some(e) => e,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));
    schedule.run(world);
    true
}

/// Runs steps until the event queue is empty or `max_steps` is reached.
/// Returns the number of steps executed.
pub fn run_until_empty(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule) {
        steps += 1;
    }
    steps
}

/// Builds the dispatch schedule; each system only runs for its own event kind.
pub fn dispatch_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((
        dispatch_started_system.run_if(is_dispatch_started),
        dispatch_system.run_if(is_ride_requested),
        dispatch_finished_system.run_if(is_dispatch_finished),
    ));
    schedule
}

/// Schedules `DispatchStarted` at tick 0. Call after [build_scenario].
pub fn initialize_dispatch(world: &mut World) {
    let mut clock = world.resource_mut::<SimulationClock>();
    clock.schedule_at(0, EventKind::DispatchStarted, None);
}

/// Everything a finished pass leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRun {
    pub store: ResultStore,
    pub telemetry: DispatchTelemetry,
}

/// Runs a complete dispatch pass in a fresh world.
///
/// The result store is only handed out once the finish event has fired, so
/// callers always see every ride or an error, never a partial pass.
#[instrument(skip_all, fields(rides = rides.len(), vehicle_count = params.vehicle_count, step_limit = params.step_limit))]
pub fn run_dispatch(
    params: DispatchParams,
    rides: &[RideRequest],
) -> Result<DispatchRun, DispatchError> {
    let mut world = World::new();
    build_scenario(&mut world, params, rides)?;
    initialize_dispatch(&mut world);

    let mut schedule = dispatch_schedule();
    run_until_empty(&mut world, &mut schedule, usize::MAX);
    take_finished_run(&mut world, rides.len())
}

/// Moves the store and telemetry out of `world`, failing unless the finish
/// event fired and all `expected` rides were recorded.
pub fn take_finished_run(
    world: &mut World,
    expected: usize,
) -> Result<DispatchRun, DispatchError> {
    let telemetry = world
        .remove_resource::<DispatchTelemetry>()
        .unwrap_or_default();
    let store = world.remove_resource::<ResultStore>().unwrap_or_default();

    let dispatched = store.total_rides();
    if !telemetry.is_finished() || dispatched != expected {
        return Err(DispatchError::IncompletePass {
            expected,
            dispatched,
        });
    }
    Ok(DispatchRun { store, telemetry })
}

/// Assigns `rides` round-robin over `vehicle_count` vehicles, walking each
/// ride under `step_limit`, and returns the per-vehicle manifests.
pub fn dispatch_rides(
    rides: &[RideRequest],
    vehicle_count: usize,
    step_limit: u64,
) -> Result<ResultStore, DispatchError> {
    run_dispatch(DispatchParams::new(vehicle_count, step_limit), rides).map(|run| run.store)
}
