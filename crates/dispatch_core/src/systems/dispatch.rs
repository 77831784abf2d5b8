use bevy_ecs::prelude::{Res, ResMut};
use tracing::{trace, warn};

use crate::clock::{CurrentEvent, EventKind, EventSubject};
use crate::fleet::VehiclePool;
use crate::manifest::ResultStore;
use crate::scenario::{PendingRides, StepBudget};
use crate::telemetry::DispatchTelemetry;
use crate::walker::walk;

/// Handles one `RideRequested` event: assign, walk, record.
///
/// The walk outcome goes to telemetry only. Assignment is fixed by the pool
/// before the walk runs and the manifest entry does not depend on it.
pub fn dispatch_system(
    event: Res<CurrentEvent>,
    budget: Res<StepBudget>,
    mut pending: ResMut<PendingRides>,
    mut pool: ResMut<VehiclePool>,
    mut store: ResMut<ResultStore>,
    mut telemetry: ResMut<DispatchTelemetry>,
) {
    if event.0.kind != EventKind::RideRequested {
        return;
    }
    let Some(EventSubject::Ride(ride_id)) = event.0.subject else {
        return;
    };

    let Some(ride) = pending.0.pop_front() else {
        warn!(ride = %ride_id, "ride requested with an empty queue");
        return;
    };
    debug_assert_eq!(ride.id, ride_id, "ride events must follow queue order");

    let vehicle = pool.next_vehicle();
    debug_assert_eq!(vehicle, pool.assign(ride.id));

    let outcome = walk(ride.end, budget.0);
    telemetry.record_walk(&outcome);
    trace!(
        ride = %ride.id,
        vehicle = %vehicle,
        steps = outcome.steps,
        halt = ?outcome.halt,
        "ride dispatched"
    );

    store.record(vehicle, ride.id);
}
