//! Fixed vehicle pool with round-robin assignment.

use std::fmt;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::ride::RideId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub usize);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round-robin vehicle pool.
///
/// Ride `i` always lands on vehicle `i mod vehicle_count`. The cursor walks
/// the same cycle for callers that dispatch rides strictly in order.
#[derive(Debug, Clone, Resource)]
pub struct VehiclePool {
    vehicle_count: usize,
    cursor: usize,
}

impl VehiclePool {
    /// Fails with [`DispatchError::Configuration`] when `vehicle_count` is zero,
    /// so a run never reaches its first ride with an empty pool.
    pub fn new(vehicle_count: usize) -> Result<Self, DispatchError> {
        if vehicle_count == 0 {
            return Err(DispatchError::configuration(
                "vehicle count must be at least 1",
            ));
        }
        Ok(Self {
            vehicle_count,
            cursor: 0,
        })
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    pub fn cursor(&self) -> VehicleId {
        VehicleId(self.cursor)
    }

    pub fn assign(&self, ride: RideId) -> VehicleId {
        VehicleId(ride.0 % self.vehicle_count)
    }

    /// Vehicle under the cursor; advances the cursor, wrapping after the last vehicle.
    pub fn next_vehicle(&mut self) -> VehicleId {
        let vehicle = VehicleId(self.cursor);
        if self.cursor < self.vehicle_count - 1 {
            self.cursor += 1;
        } else {
            self.cursor = 0;
        }
        vehicle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_pool() {
        let err = VehiclePool::new(0).unwrap_err();
        assert!(matches!(err, DispatchError::Configuration { .. }));
    }

    #[test]
    fn assign_is_modulo() {
        let pool = VehiclePool::new(3).unwrap();
        let assigned: Vec<usize> = (0..7).map(|i| pool.assign(RideId(i)).0).collect();
        assert_eq!(assigned, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn cursor_matches_modulo_rule() {
        for count in 1..6 {
            let mut pool = VehiclePool::new(count).unwrap();
            for i in 0..25 {
                assert_eq!(pool.next_vehicle(), pool.assign(RideId(i)), "count={count} i={i}");
            }
        }
    }

    #[test]
    fn single_vehicle_never_moves() {
        let mut pool = VehiclePool::new(1).unwrap();
        for _ in 0..4 {
            assert_eq!(pool.next_vehicle(), VehicleId(0));
        }
        assert_eq!(pool.cursor(), VehicleId(0));
    }
}
