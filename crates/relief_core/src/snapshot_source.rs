use crate::{
    model::{location::Location, road_segment::RoadSegment},
    snapshot::GraphSnapshot,
};

/// Data-access layer the computations pull their input from.
pub trait SnapshotSource {
    fn fetch_all_locations(&self) -> anyhow::Result<Vec<Location>>;

    fn fetch_all_road_segments(&self) -> anyhow::Result<Vec<RoadSegment>>;

    fn snapshot(&self) -> anyhow::Result<GraphSnapshot> {
        Ok(GraphSnapshot::new(
            self.fetch_all_locations()?,
            self.fetch_all_road_segments()?,
        ))
    }
}

impl SnapshotSource for GraphSnapshot {
    fn fetch_all_locations(&self) -> anyhow::Result<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn fetch_all_road_segments(&self) -> anyhow::Result<Vec<RoadSegment>> {
        Ok(self.road_segments.clone())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use crate::test_utils::reference_scenario;

    use super::*;

    struct UnavailableRoads;

    impl SnapshotSource for UnavailableRoads {
        fn fetch_all_locations(&self) -> anyhow::Result<Vec<Location>> {
            Ok(reference_scenario::snapshot().locations)
        }

        fn fetch_all_road_segments(&self) -> anyhow::Result<Vec<RoadSegment>> {
            bail!("road service unavailable")
        }
    }

    #[test]
    fn test_snapshot_copies_the_source() {
        let source = reference_scenario::snapshot();

        assert_eq!(source.snapshot().unwrap(), source);
    }

    #[test]
    fn test_snapshot_propagates_fetch_errors() {
        let error = UnavailableRoads.snapshot().unwrap_err();

        assert_eq!(error.to_string(), "road service unavailable");
    }
}
