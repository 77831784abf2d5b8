use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::fleet::VehiclePool;
use crate::ride::InstanceHeader;

/// Global per-ride walk budget. Every ride's walk starts from zero steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct StepBudget(pub u64);

/// Parameters for one dispatch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Size of the round-robin pool. Must be at least 1.
    pub vehicle_count: usize,
    /// Maximum number of unit moves a single ride's walk may make.
    pub step_limit: u64,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            vehicle_count: 1,
            step_limit: 0,
        }
    }
}

impl DispatchParams {
    pub fn new(vehicle_count: usize, step_limit: u64) -> Self {
        Self {
            vehicle_count,
            step_limit,
        }
    }

    pub fn from_header(header: &InstanceHeader) -> Self {
        Self::new(header.vehicle_count, header.step_limit)
    }

    pub fn with_vehicle_count(mut self, vehicle_count: usize) -> Self {
        self.vehicle_count = vehicle_count;
        self
    }

    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Same checks the pool applies when the scenario is built.
    pub fn validate(&self) -> Result<(), DispatchError> {
        VehiclePool::new(self.vehicle_count).map(drop)
    }
}
