use std::sync::Arc;

use itertools::Itertools;
use mbta_router::{source, Network, NetworkOptions, RouteError, Router};
use proptest::prelude::*;

const SAMPLE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/MBTA_Rapid_Transit_Stop_Distances.csv"
);

fn sample_router() -> Router {
    let records = source::load(SAMPLE).unwrap();
    Router::new(Arc::new(
        Network::build(&records, &NetworkOptions::default()).unwrap(),
    ))
}

fn stop_names() -> Vec<String> {
    sample_router()
        .network
        .stop_names()
        .map(str::to_owned)
        .collect()
}

#[test]
fn copley_to_airport_changes_at_government_center() {
    let route = sample_router().route("Copley", "Airport").unwrap();

    assert_eq!(
        route,
        vec![
            "Green Copley",
            "Green Arlington",
            "Green Boylston",
            "Green Park Street",
            "Green Government Center",
            "Blue Government Center",
            "Blue State",
            "Blue Aquarium",
            "Blue Maverick",
            "Blue Airport",
        ]
    );
}

#[test]
fn copley_to_airport_pays_one_transfer() {
    let router = sample_router();
    let journey = router.journey("Copley", "Airport").unwrap();

    assert!((journey.cost - 7.2).abs() < 1e-9);
    assert_eq!(journey.transfers(), 1);
    assert_eq!(router.network.edge_weight("70202", "70040"), Some(3.0));
}

#[test]
fn every_shared_station_has_a_transfer() {
    let records = source::load(SAMPLE).unwrap();
    let network = Network::build(&records, &NetworkOptions::default()).unwrap();
    let stations = records
        .iter()
        .map(|record| (record.from_station_id.as_str(), record))
        .into_group_map();

    let mut shared = 0;
    for (station, at_station) in &stations {
        let lines = at_station.iter().map(|record| &record.route_id).unique();
        if lines.count() < 2 {
            continue;
        }
        shared += 1;

        let joined = at_station
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| a.route_id != b.route_id)
            .any(|(a, b)| network.edge_weight(&a.from_stop_id, &b.from_stop_id) == Some(3.0));
        assert!(joined, "no transfer edge at {}", station);
    }

    // Government Center, Park Street, State and Downtown Crossing.
    assert_eq!(shared, 4);
    assert_eq!(network.node_count(), 20);
    assert_eq!(network.edge_count(), records.len() + shared);
}

#[test]
fn sample_is_connected() {
    let router = sample_router();
    let names = stop_names();

    for from in &names {
        for to in &names {
            let route = router.route(from, to).unwrap();
            assert!(route.first().unwrap().ends_with(from.as_str()));
            assert!(route.last().unwrap().ends_with(to.as_str()));
        }
    }
}

#[test]
fn unknown_stop_is_reported() {
    assert_eq!(
        sample_router().route("Copley", "Harvard"),
        Err(RouteError::NotFound {
            name: "Harvard".into()
        })
    );
}

proptest! {
    #[test]
    fn cost_is_symmetric(
        from in prop::sample::select(stop_names()),
        to in prop::sample::select(stop_names()),
    ) {
        let router = sample_router();
        let there = router.journey(&from, &to).unwrap();
        let back = router.journey(&to, &from).unwrap();

        prop_assert!((there.cost - back.cost).abs() < 1e-9);
        prop_assert_eq!(there.stops.len() == 1, from == to);
    }
}
