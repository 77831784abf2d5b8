mod support;

use std::collections::BTreeSet;

use dispatch_core::report::render_report;
use dispatch_core::runner::run_dispatch;
use dispatch_core::scenario::DispatchParams;
use dispatch_core::test_helpers::{random_rides, ride_to, uniform_rides};
use dispatch_core::{dispatch_rides, DispatchError, GridPoint};
use support::fixtures::{all_ride_ids, manifest, manifests};

#[test]
fn every_ride_lands_exactly_once_in_ascending_order() {
    for vehicle_count in 1..=7 {
        for n in [0usize, 1, 2, 6, 7, 8, 31] {
            let rides = random_rides(n as u64 * 13 + vehicle_count as u64, n, 20, 20);
            let store = dispatch_rides(&rides, vehicle_count, 15).unwrap();

            let ids = all_ride_ids(&store);
            assert_eq!(ids, (0..n).collect::<BTreeSet<_>>(), "vehicles={vehicle_count} n={n}");

            for (vehicle, rides) in manifests(&store) {
                assert!(!rides.is_empty());
                assert!(rides.windows(2).all(|w| w[0] < w[1]));
                assert!(rides.iter().all(|r| r % vehicle_count == vehicle));
            }
            assert_eq!(store.vehicles_used(), n.min(vehicle_count));
        }
    }
}

#[test]
fn ride_i_goes_to_vehicle_i_mod_count() {
    let rides = random_rides(99, 40, 30, 30);
    let store = dispatch_rides(&rides, 6, 1_000).unwrap();
    for (vehicle, rides) in store.iter() {
        for ride in rides {
            assert_eq!(ride.0 % 6, vehicle.0);
        }
    }
}

#[test]
fn step_limit_never_changes_assignment() {
    let rides = random_rides(5, 25, 100, 100);
    let baseline = render_report(&dispatch_rides(&rides, 4, 0).unwrap());
    for step_limit in [1, 2, 3, 17, 150, 10_000, u64::MAX] {
        let report = render_report(&dispatch_rides(&rides, 4, step_limit).unwrap());
        assert_eq!(report, baseline, "step_limit={step_limit}");
    }
}

#[test]
fn destinations_never_change_assignment() {
    let near = uniform_rides(9, GridPoint::new(0, 0));
    let far = uniform_rides(9, GridPoint::new(5_000, 7_000));
    assert_eq!(
        dispatch_rides(&near, 4, 50).unwrap(),
        dispatch_rides(&far, 4, 50).unwrap()
    );
}

#[test]
fn single_vehicle_takes_everything_in_order() {
    let rides = random_rides(3, 12, 10, 10);
    let store = dispatch_rides(&rides, 1, 30).unwrap();
    assert_eq!(manifest(&store, 0), (0..12).collect::<Vec<_>>());
    assert_eq!(
        render_report(&store),
        "12 0 1 2 3 4 5 6 7 8 9 10 11\n"
    );
}

#[test]
fn two_vehicles_five_rides_scenario() {
    let rides: Vec<_> = (0..5).map(|i| ride_to(i, 3, 3)).collect();
    let store = dispatch_rides(&rides, 2, 10).unwrap();
    let report = render_report(&store);
    let mut lines: Vec<&str> = report.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["2 1 3", "3 0 2 4"]);
}

#[test]
fn no_rides_means_no_lines() {
    let store = dispatch_rides(&[], 3, 10).unwrap();
    assert!(store.is_empty());
    assert_eq!(render_report(&store), "");
}

#[test]
fn zero_budget_exhausts_every_walk_without_touching_assignment() {
    let rides = random_rides(11, 8, 10, 10);
    let run = run_dispatch(DispatchParams::new(3, 0), &rides).unwrap();
    assert_eq!(run.telemetry.walks_budget_exhausted, 8);
    assert_eq!(run.telemetry.walks_completed, 0);
    assert_eq!(run.telemetry.total_walk_steps, 0);
    assert_eq!(
        run.store,
        dispatch_rides(&rides, 3, u64::MAX).unwrap()
    );
}

#[test]
fn generous_budget_completes_every_walk() {
    let rides = random_rides(12, 10, 10, 10);
    let run = run_dispatch(DispatchParams::new(2, 1_000), &rides).unwrap();
    assert_eq!(run.telemetry.walks_completed, 10);
    let expected: u64 = rides
        .iter()
        .map(|r| u64::from(r.end.x) + u64::from(r.end.y) + 2)
        .sum();
    assert_eq!(run.telemetry.total_walk_steps, expected);
}

#[test]
fn empty_pool_is_rejected_before_any_ride() {
    let rides = random_rides(1, 3, 10, 10);
    let err = run_dispatch(DispatchParams::new(0, 10), &rides).unwrap_err();
    assert!(matches!(err, DispatchError::Configuration { .. }));
}
