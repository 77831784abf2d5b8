use std::collections::VecDeque;

use bevy_ecs::prelude::{Resource, World};
use tracing::debug;

use crate::clock::SimulationClock;
use crate::error::DispatchError;
use crate::fleet::VehiclePool;
use crate::manifest::ResultStore;
use crate::ride::RideRequest;
use crate::scenario::params::{DispatchParams, StepBudget};
use crate::telemetry::DispatchTelemetry;

/// Rides waiting for their `RideRequested` event, in input order (FIFO).
#[derive(Debug, Clone, Default, Resource)]
pub struct PendingRides(pub VecDeque<RideRequest>);

impl PendingRides {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Inserts every resource a dispatch pass needs.
///
/// Configuration is checked here, before any ride is queued. Rides must be
/// numbered `0..n` in input order since the pool's cursor hands out vehicles
/// in that order.
pub fn build_scenario(
    world: &mut World,
    params: DispatchParams,
    rides: &[RideRequest],
) -> Result<(), DispatchError> {
    let pool = VehiclePool::new(params.vehicle_count)?;

    if let Some((expected, ride)) = rides
        .iter()
        .enumerate()
        .find(|(index, ride)| ride.id.0 != *index)
    {
        return Err(DispatchError::RideOutOfSequence {
            expected,
            found: ride.id.0,
        });
    }

    world.insert_resource(SimulationClock::default());
    world.insert_resource(pool);
    world.insert_resource(StepBudget(params.step_limit));
    world.insert_resource(PendingRides(rides.iter().copied().collect()));
    world.insert_resource(ResultStore::default());
    world.insert_resource(DispatchTelemetry::default());

    debug!(
        rides = rides.len(),
        vehicle_count = params.vehicle_count,
        step_limit = params.step_limit,
        "scenario built"
    );
    Ok(())
}
