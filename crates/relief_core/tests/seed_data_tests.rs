use relief_core::{
    json::types::JsonRouteResult,
    model::{kilometers::Kilometers, location::LocationId},
    priority::{priority_level::PriorityLevel, priority_weights::PriorityWeights},
    routing::{routing_path::RouteResult, routing_request::RoutingRequest},
};

mod setup;

#[test]
fn test_seed_snapshot_is_valid() {
    let snapshot = setup::load_seed_snapshot();

    assert_eq!(snapshot.validate(), Ok(()));
    assert_eq!(snapshot.centers().count(), 2);
    assert_eq!(snapshot.need_sites().count(), 5);
    assert_eq!(snapshot.road_segments.len(), 9);
}

#[test]
fn test_seed_priorities() {
    let snapshot = setup::load_seed_snapshot();

    let ranked = snapshot
        .compute_priorities(PriorityWeights::default())
        .unwrap();

    let ranking: Vec<(&str, f64)> = ranked
        .iter()
        .map(|site| (site.id.as_str(), site.priority_score))
        .collect();

    assert_eq!(
        ranking,
        vec![
            ("area-rampur", 1.0),
            ("area-mukteshwar", 0.72),
            ("area-bhowali", 0.687),
            ("area-kathgodam", 0.613),
            ("area-ramnagar", 0.347),
        ]
    );

    let levels: Vec<PriorityLevel> = ranked
        .iter()
        .map(|site| PriorityLevel::from_score(site.priority_score))
        .collect();

    assert_eq!(
        levels,
        vec![
            PriorityLevel::High,
            PriorityLevel::High,
            PriorityLevel::Medium,
            PriorityLevel::Medium,
            PriorityLevel::Low,
        ]
    );
}

#[test]
fn test_seed_route_to_rampur() {
    let snapshot = setup::load_seed_snapshot();

    let result = snapshot
        .route(&RoutingRequest::new("center-haldwani", "area-rampur"))
        .unwrap();

    let json = serde_json::to_value(JsonRouteResult::from(result)).unwrap();

    assert_eq!(json["found"], true);
    assert_eq!(json["totalDistance"], 5.2);
    assert_eq!(json["path"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_seed_route_around_blocked_road() {
    let snapshot = setup::load_seed_snapshot();

    let result = snapshot
        .route(&RoutingRequest::new("center-nainital", "area-mukteshwar"))
        .unwrap();

    let path = result.path().unwrap();
    let ids: Vec<&LocationId> = path.points().iter().map(|point| &point.id).collect();

    assert_eq!(
        ids,
        vec![
            &LocationId::new("center-nainital"),
            &LocationId::new("area-bhowali"),
            &LocationId::new("area-mukteshwar"),
        ]
    );
    assert_eq!(path.total_distance(), Kilometers::new(26.0));
}

#[test]
fn test_seed_route_when_mukteshwar_is_cut_off() {
    let mut snapshot = setup::load_seed_snapshot();

    for segment in snapshot.road_segments.iter_mut() {
        if segment.to_location.as_str() == "area-mukteshwar" {
            segment.is_blocked = true;
        }
    }

    let result = snapshot
        .route(&RoutingRequest::new("center-nainital", "area-mukteshwar"))
        .unwrap();

    assert_eq!(result, RouteResult::NotFound);
}
