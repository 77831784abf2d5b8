use bevy_ecs::prelude::{Res, ResMut};
use tracing::info;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::fleet::VehiclePool;
use crate::manifest::ResultStore;
use crate::scenario::{PendingRides, StepBudget};
use crate::telemetry::DispatchTelemetry;

/// Queues one `RideRequested` per pending ride (tick = sequence index),
/// followed by `DispatchFinished` once every ride has had its tick.
pub fn dispatch_started_system(
    mut clock: ResMut<SimulationClock>,
    event: Res<CurrentEvent>,
    pending: Res<PendingRides>,
    pool: Res<VehiclePool>,
    budget: Res<StepBudget>,
) {
    if event.0.kind != EventKind::DispatchStarted {
        return;
    }

    let start = clock.now();
    for (offset, ride) in pending.0.iter().enumerate() {
        clock.schedule_at(
            start + offset as u64,
            EventKind::RideRequested,
            Some(EventSubject::Ride(ride.id)),
        );
    }
    clock.schedule_at(
        start + pending.len() as u64,
        EventKind::DispatchFinished,
        None,
    );

    info!(
        rides = pending.len(),
        vehicles = pool.vehicle_count(),
        step_limit = budget.0,
        "dispatch started"
    );
}

pub fn dispatch_finished_system(
    clock: Res<SimulationClock>,
    event: Res<CurrentEvent>,
    store: Res<ResultStore>,
    mut telemetry: ResMut<DispatchTelemetry>,
) {
    if event.0.kind != EventKind::DispatchFinished {
        return;
    }

    telemetry.finished_at = Some(clock.now());
    info!(
        rides = telemetry.rides_dispatched,
        vehicles_used = store.vehicles_used(),
        walks_completed = telemetry.walks_completed,
        walks_budget_exhausted = telemetry.walks_budget_exhausted,
        total_walk_steps = telemetry.total_walk_steps,
        "dispatch finished"
    );
}
