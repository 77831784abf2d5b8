#![allow(dead_code)]

use std::collections::BTreeSet;

use dispatch_core::{ResultStore, RideId, VehicleId};

/// Every ride id in the store, checking that none appears twice.
pub fn all_ride_ids(store: &ResultStore) -> BTreeSet<usize> {
    let mut seen = BTreeSet::new();
    for (_, rides) in store.iter() {
        for ride in rides {
            assert!(seen.insert(ride.0), "ride {ride} assigned twice");
        }
    }
    seen
}

/// Manifests as plain vectors, sorted by vehicle, for easy comparison.
pub fn manifests(store: &ResultStore) -> Vec<(usize, Vec<usize>)> {
    store
        .report_lines()
        .iter()
        .map(|line| (line.vehicle.0, line.rides.iter().map(|r: &RideId| r.0).collect()))
        .collect()
}

pub fn manifest(store: &ResultStore, vehicle: usize) -> Vec<usize> {
    store
        .manifest(VehicleId(vehicle))
        .map(|rides| rides.iter().map(|r| r.0).collect())
        .unwrap_or_default()
}
