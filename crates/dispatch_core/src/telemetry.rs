//! Telemetry for a dispatch pass: how the per-ride walks ended.
//!
//! Nothing here is read back by assignment or by the report.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::walker::{HaltReason, WalkOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Resource, Serialize, Deserialize)]
pub struct DispatchTelemetry {
    pub rides_dispatched: usize,
    pub walks_completed: usize,
    pub walks_budget_exhausted: usize,
    pub total_walk_steps: u64,
    pub longest_walk_steps: u64,
    /// Clock tick at which the finish event fired; `None` while the pass is running.
    pub finished_at: Option<u64>,
}

impl DispatchTelemetry {
    pub fn record_walk(&mut self, outcome: &WalkOutcome) {
        self.rides_dispatched += 1;
        match outcome.halt {
            HaltReason::Completed => self.walks_completed += 1,
            HaltReason::BudgetExhausted => self.walks_budget_exhausted += 1,
        }
        self.total_walk_steps = self.total_walk_steps.saturating_add(outcome.steps);
        self.longest_walk_steps = self.longest_walk_steps.max(outcome.steps);
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn mean_walk_steps(&self) -> f64 {
        if self.rides_dispatched == 0 {
            0.0
        } else {
            self.total_walk_steps as f64 / self.rides_dispatched as f64
        }
    }
}
