use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use relief_core::{
    model::{location::Location, road_segment::RoadSegment},
    snapshot::GraphSnapshot,
    snapshot_source::SnapshotSource,
};
use tracing::debug;

/// Snapshot stored as a JSON file.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    fn read(&self) -> anyhow::Result<GraphSnapshot> {
        read_snapshot(&self.path)
    }
}

impl SnapshotSource for SnapshotFile {
    fn fetch_all_locations(&self) -> anyhow::Result<Vec<Location>> {
        Ok(self.read()?.locations)
    }

    fn fetch_all_road_segments(&self) -> anyhow::Result<Vec<RoadSegment>> {
        Ok(self.read()?.road_segments)
    }

    fn snapshot(&self) -> anyhow::Result<GraphSnapshot> {
        let snapshot = self.read()?;
        snapshot
            .validate()
            .with_context(|| format!("Invalid snapshot in {}", self.path.display()))?;

        Ok(snapshot)
    }
}

fn read_snapshot(path: &Path) -> anyhow::Result<GraphSnapshot> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let snapshot: GraphSnapshot = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot parse {}", path.display()))?;

    debug!(
        locations = snapshot.locations.len(),
        road_segments = snapshot.road_segments.len(),
        "read snapshot {}",
        path.display()
    );

    Ok(snapshot)
}
