//! Per-vehicle ride manifests collected during a dispatch pass.

use std::collections::HashMap;
use std::fmt;

use bevy_ecs::prelude::Resource;

use crate::fleet::VehicleId;
use crate::ride::RideId;

/// Vehicle to the rides assigned to it, in assignment order.
///
/// Only vehicles that received at least one ride are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Resource)]
pub struct ResultStore {
    manifests: HashMap<VehicleId, Vec<RideId>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `ride` to the vehicle's manifest, creating the entry on first use.
    pub fn record(&mut self, vehicle: VehicleId, ride: RideId) {
        self.manifests.entry(vehicle).or_default().push(ride);
    }

    pub fn manifest(&self, vehicle: VehicleId) -> Option<&[RideId]> {
        self.manifests.get(&vehicle).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }

    /// Number of vehicles with at least one ride.
    pub fn vehicles_used(&self) -> usize {
        self.manifests.len()
    }

    pub fn total_rides(&self) -> usize {
        self.manifests.values().map(Vec::len).sum()
    }

    /// Manifests in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, &[RideId])> {
        self.manifests
            .iter()
            .map(|(vehicle, rides)| (*vehicle, rides.as_slice()))
    }

    /// Report projection, one line per used vehicle, sorted by vehicle id.
    pub fn report_lines(&self) -> Vec<ReportLine<'_>> {
        let mut lines: Vec<ReportLine<'_>> = self
            .iter()
            .map(|(vehicle, rides)| ReportLine { vehicle, rides })
            .collect();
        lines.sort_by_key(|line| line.vehicle);
        lines
    }
}

/// One report line: `<count> <ride> <ride> ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLine<'a> {
    pub vehicle: VehicleId,
    pub rides: &'a [RideId],
}

impl ReportLine<'_> {
    pub fn count(&self) -> usize {
        self.rides.len()
    }
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rides.len())?;
        for ride in self.rides {
            write!(f, " {ride}")?;
        }
        Ok(())
    }
}
