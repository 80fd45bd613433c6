use fxhash::FxHashSet;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use relief_core::{
    error::{GraphError, RouteError},
    model::{location::Location, minutes::Minutes, road_segment::RoadSegment},
    routing::{
        routing_path::RouteResult,
        routing_request::{RouteMetric, RoutingAlgorithm, RoutingRequest, RoutingRequestOptions},
    },
    snapshot::GraphSnapshot,
};

mod setup;

/// Minimum distance over every simple path, `None` when `end` is unreachable.
fn exhaustive_shortest_distance(
    node_count: usize,
    roads: &[RoadSegment],
    start: usize,
    end: usize,
) -> Option<f64> {
    fn visit(
        node: usize,
        end: usize,
        distance: f64,
        neighbours: &[Vec<(usize, f64)>],
        visited: &mut FxHashSet<usize>,
        best: &mut Option<f64>,
    ) {
        if node == end {
            *best = Some(best.map_or(distance, |best| best.min(distance)));
            return;
        }

        for &(next, weight) in &neighbours[node] {
            if visited.insert(next) {
                visit(next, end, distance + weight, neighbours, visited, best);
                visited.remove(&next);
            }
        }
    }

    let mut neighbours = vec![vec![]; node_count];
    for road in roads.iter().filter(|road| !road.is_blocked) {
        let from = index_of(road.from_location.as_str());
        let to = index_of(road.to_location.as_str());
        neighbours[from].push((to, road.distance.value()));
        neighbours[to].push((from, road.distance.value()));
    }

    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut best = None;
    visit(start, end, 0.0, &neighbours, &mut visited, &mut best);
    best
}

fn index_of(id: &str) -> usize {
    id.trim_start_matches("loc-").parse().unwrap()
}

fn random_snapshot(rng: &mut SmallRng) -> (usize, GraphSnapshot) {
    let node_count = rng.random_range(1..=7);
    let road_count = rng.random_range(0..=node_count * 2);

    let roads = (0..road_count)
        .map(|index| {
            setup::create_road(
                index,
                rng.random_range(0..node_count),
                rng.random_range(0..node_count),
                // Whole kilometers keep sums exact
                rng.random_range(0..20) as f64,
                rng.random_bool(0.2),
            )
        })
        .collect();

    let locations: Vec<Location> = setup::create_locations(node_count);
    (node_count, GraphSnapshot::new(locations, roads))
}

#[test]
fn test_matches_exhaustive_search_on_random_graphs() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let (node_count, snapshot) = random_snapshot(&mut rng);
        let start = rng.random_range(0..node_count);
        let end = rng.random_range(0..node_count);

        let expected =
            exhaustive_shortest_distance(node_count, &snapshot.road_segments, start, end);

        for algorithm in [RoutingAlgorithm::FrontierScan, RoutingAlgorithm::BinaryHeap] {
            let request = RoutingRequest::new(setup::location_id(start), setup::location_id(end))
                .with_options(RoutingRequestOptions {
                    metric: RouteMetric::Distance,
                    algorithm,
                });

            let result = snapshot.route(&request).unwrap();

            match (&result, expected) {
                (RouteResult::Found(path), Some(distance)) => {
                    assert_eq!(path.total_distance().value(), distance);
                    assert_eq!(path.points().first().map(|p| &p.id), Some(&request.start));
                    assert_eq!(path.points().last().map(|p| &p.id), Some(&request.end));
                }
                (RouteResult::NotFound, None) => {}
                _ => panic!("solver returned {result:?}, exhaustive search found {expected:?}"),
            }
        }
    }
}

#[test]
fn test_frontiers_return_identical_paths_on_random_graphs() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..200 {
        let (node_count, snapshot) = random_snapshot(&mut rng);
        let start = setup::location_id(rng.random_range(0..node_count));
        let end = setup::location_id(rng.random_range(0..node_count));

        let scan = RoutingRequest::new(start.clone(), end.clone());
        let heap = RoutingRequest::new(start, end).with_options(RoutingRequestOptions {
            algorithm: RoutingAlgorithm::BinaryHeap,
            ..Default::default()
        });

        assert_eq!(snapshot.route(&scan), snapshot.route(&heap));
    }
}

#[test]
fn test_path_legs_connect_consecutive_points() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..200 {
        let (node_count, snapshot) = random_snapshot(&mut rng);
        let request = RoutingRequest::new(
            setup::location_id(rng.random_range(0..node_count)),
            setup::location_id(rng.random_range(0..node_count)),
        );

        let Ok(RouteResult::Found(path)) = snapshot.route(&request) else {
            continue;
        };

        assert_eq!(path.points().len(), path.legs().len() + 1);

        for (leg, pair) in path.legs().iter().zip(path.points().windows(2)) {
            let segment = snapshot
                .road_segments
                .iter()
                .find(|segment| segment.id == leg.segment_id)
                .unwrap();

            assert!(!segment.is_blocked);
            let endpoints = [&segment.from_location, &segment.to_location];
            assert!(endpoints.contains(&&pair[0].id));
            assert!(endpoints.contains(&&pair[1].id));
        }
    }
}

#[test]
fn test_distances_too_large_to_sum_are_reported() {
    let roads = [(0, 1), (1, 2)]
        .into_iter()
        .enumerate()
        .map(|(index, (from, to))| RoadSegment {
            travel_time: Minutes::new(60.0),
            ..setup::create_road(index, from, to, 1e308, false)
        })
        .collect();
    let snapshot = GraphSnapshot::new(setup::create_locations(3), roads);

    for algorithm in [RoutingAlgorithm::FrontierScan, RoutingAlgorithm::BinaryHeap] {
        let request = RoutingRequest::new(setup::location_id(0), setup::location_id(2))
            .with_options(RoutingRequestOptions {
                metric: RouteMetric::Distance,
                algorithm,
            });

        assert_eq!(
            snapshot.route(&request),
            Err(RouteError::Graph(GraphError::WeightOverflow {
                metric: "distance"
            }))
        );
    }
}
