#![allow(dead_code)]

use std::{fs::File, io::BufReader, path::PathBuf};

use relief_core::{
    model::{
        center::{Center, CenterStatus},
        kilometers::Kilometers,
        location::{Location, LocationId},
        minutes::Minutes,
        resources::Resources,
        road_segment::{RoadCondition, RoadSegment, RoadSegmentId},
    },
    snapshot::GraphSnapshot,
};

pub fn load_seed_snapshot() -> GraphSnapshot {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/seed.json");
    let reader = BufReader::new(File::open(path).unwrap());
    serde_json::from_reader(reader).unwrap()
}

pub fn location_id(index: usize) -> String {
    format!("loc-{index}")
}

pub fn create_locations(count: usize) -> Vec<Location> {
    (0..count)
        .map(|index| {
            Location::Center(Center {
                id: LocationId::new(location_id(index)),
                name: format!("Location {index}"),
                latitude: 29.0 + index as f64 * 0.01,
                longitude: 79.0,
                resources: Resources::EMPTY,
                status: CenterStatus::Active,
            })
        })
        .collect()
}

pub fn create_road(
    index: usize,
    from: usize,
    to: usize,
    distance: f64,
    blocked: bool,
) -> RoadSegment {
    RoadSegment {
        id: RoadSegmentId::new(format!("road-{index}")),
        from_location: LocationId::new(location_id(from)),
        to_location: LocationId::new(location_id(to)),
        distance: Kilometers::new(distance),
        travel_time: Minutes::new(distance * 2.0),
        is_blocked: blocked,
        road_condition: RoadCondition::Good,
    }
}
