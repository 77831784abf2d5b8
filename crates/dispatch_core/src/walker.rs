//! Step-bounded grid walk from the origin toward a ride's destination.
//!
//! The walk is a two-phase state machine. [`WalkPhase::AdvanceX`] moves one
//! column at a time until it has stepped one past `target.x`, then hands over
//! to [`WalkPhase::AdvanceY`], which does the same for rows. Every step is
//! charged against the budget, and the walk halts the moment the budget is
//! spent, whatever phase it is in.
//!
//! Two quirks are load-bearing and pinned by tests:
//! - the walk always starts at [`GridPoint::ORIGIN`], never at the ride's pickup;
//! - after `AdvanceY` overshoots, re-entry into `AdvanceX` is guarded by
//!   `y <= target.x` (not `target.y`).
//!
//! Dispatch never consults the outcome; it only feeds telemetry.

use serde::{Deserialize, Serialize};

use crate::ride::GridPoint;

/// Why a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HaltReason {
    BudgetExhausted,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkPhase {
    AdvanceX,
    AdvanceY,
}

/// Result of one walk. Positions are widened to `u64` since the walk
/// overshoots the target by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOutcome {
    pub steps: u64,
    pub halt: HaltReason,
    pub x: u64,
    pub y: u64,
}

/// Per-call walk state; nothing survives between rides.
#[derive(Debug, Clone, Copy)]
struct WalkState {
    x: u64,
    y: u64,
    steps: u64,
    phase: WalkPhase,
}

impl WalkState {
    fn at_origin() -> Self {
        Self {
            x: u64::from(GridPoint::ORIGIN.x),
            y: u64::from(GridPoint::ORIGIN.y),
            steps: 0,
            phase: WalkPhase::AdvanceX,
        }
    }

    fn halt(self, halt: HaltReason) -> WalkOutcome {
        WalkOutcome {
            steps: self.steps,
            halt,
            x: self.x,
            y: self.y,
        }
    }
}

/// Walks from the origin toward `target`, spending at most `step_limit` steps.
pub fn walk(target: GridPoint, step_limit: u64) -> WalkOutcome {
    let target_x = u64::from(target.x);
    let target_y = u64::from(target.y);
    let mut state = WalkState::at_origin();

    loop {
        if state.steps >= step_limit {
            return state.halt(HaltReason::BudgetExhausted);
        }
        match state.phase {
            WalkPhase::AdvanceX => {
                if state.x <= target_x {
                    state.x += 1;
                    state.steps += 1;
                } else if state.y <= target_y {
                    state.phase = WalkPhase::AdvanceY;
                } else {
                    return state.halt(HaltReason::Completed);
                }
            }
            WalkPhase::AdvanceY => {
                if state.y <= target_y {
                    state.y += 1;
                    state.steps += 1;
                } else if state.y <= target_x {
                    state.phase = WalkPhase::AdvanceX;
                } else {
                    return state.halt(HaltReason::Completed);
                }
            }
        }
    }
}
