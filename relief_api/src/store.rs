use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use jiff::Timestamp;
use relief_core::{
    model::{
        center::Center,
        location::{Location, LocationId},
        need_site::NeedSite,
        road_segment::{RoadSegment, RoadSegmentId},
    },
    snapshot::GraphSnapshot,
    snapshot_source::SnapshotSource,
};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationKind {
    Center,
    NeedSite,
}

impl From<&Location> for LocationKind {
    fn from(location: &Location) -> Self {
        match location {
            Location::Center(_) => LocationKind::Center,
            Location::NeedSite(_) => LocationKind::NeedSite,
        }
    }
}

/// A stored value with its bookkeeping timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    #[serde(flatten)]
    pub value: T,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<T> Stored<T> {
    pub fn new(value: T) -> Self {
        let now = Timestamp::now();
        Stored {
            value,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn as_ref(&self) -> Stored<&T> {
        Stored {
            value: &self.value,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Stored<U> {
        Stored {
            value: f(self.value),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn filter_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<Stored<U>> {
        Some(Stored {
            value: f(self.value)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    fn touch(&mut self, value: T) {
        self.value = value;
        self.updated_at = Timestamp::now();
    }
}

impl<T: Clone> Stored<&T> {
    pub fn cloned(self) -> Stored<T> {
        self.map(T::clone)
    }
}

/// Most recently created first. Records sharing a creation instant come out in
/// reverse insertion order.
pub fn newest_first<T>(mut records: Vec<Stored<T>>) -> Vec<Stored<T>> {
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records
}

/// In-memory data-access layer. Locations keep their insertion order, which is the
/// snapshot order the computations see.
#[derive(Debug, Default)]
pub struct ReliefStore {
    locations: Vec<Stored<Location>>,
    road_segments: Vec<Stored<RoadSegment>>,
}

impl ReliefStore {
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        ReliefStore {
            locations: snapshot.locations.into_iter().map(Stored::new).collect(),
            road_segments: snapshot.road_segments.into_iter().map(Stored::new).collect(),
        }
    }

    pub fn centers(&self) -> impl Iterator<Item = Stored<&Center>> {
        self.locations
            .iter()
            .filter_map(|record| record.as_ref().filter_map(Location::as_center))
    }

    pub fn need_sites(&self) -> impl Iterator<Item = Stored<&NeedSite>> {
        self.locations
            .iter()
            .filter_map(|record| record.as_ref().filter_map(Location::as_need_site))
    }

    pub fn location(&self, id: &LocationId, kind: LocationKind) -> Option<&Stored<Location>> {
        self.location_index(id, kind)
            .map(|index| &self.locations[index])
    }

    /// Looks a location up by id whatever its kind.
    pub fn find_location(&self, id: &LocationId) -> Option<&Location> {
        self.locations
            .iter()
            .map(|record| &record.value)
            .find(|location| location.id() == id)
    }

    pub fn insert_location(&mut self, record: Stored<Location>) {
        self.locations.push(record);
    }

    /// Replaces the location with the same id and kind. The creation time is kept.
    pub fn replace_location(&mut self, location: Location) -> Option<Stored<Location>> {
        let index = self.location_index(location.id(), LocationKind::from(&location))?;
        let record = &mut self.locations[index];
        record.touch(location);

        Some(record.clone())
    }

    pub fn remove_location(
        &mut self,
        id: &LocationId,
        kind: LocationKind,
    ) -> Option<Stored<Location>> {
        let index = self.location_index(id, kind)?;
        Some(self.locations.remove(index))
    }

    fn location_index(&self, id: &LocationId, kind: LocationKind) -> Option<usize> {
        self.locations.iter().position(|record| {
            record.value.id() == id && LocationKind::from(&record.value) == kind
        })
    }

    pub fn road_segments(&self) -> &[Stored<RoadSegment>] {
        &self.road_segments
    }

    pub fn road_segment(&self, id: &RoadSegmentId) -> Option<&Stored<RoadSegment>> {
        self.road_segments.iter().find(|record| &record.value.id == id)
    }

    pub fn insert_road_segment(&mut self, record: Stored<RoadSegment>) {
        self.road_segments.push(record);
    }

    pub fn replace_road_segment(&mut self, segment: RoadSegment) -> Option<Stored<RoadSegment>> {
        let record = self
            .road_segments
            .iter_mut()
            .find(|record| record.value.id == segment.id)?;
        record.touch(segment);

        Some(record.clone())
    }

    pub fn remove_road_segment(&mut self, id: &RoadSegmentId) -> Option<Stored<RoadSegment>> {
        let index = self
            .road_segments
            .iter()
            .position(|record| &record.value.id == id)?;

        Some(self.road_segments.remove(index))
    }

    /// Writes computed scores back to the stored need sites that still exist.
    pub fn apply_priorities(&mut self, ranked: &[NeedSite]) {
        let now = Timestamp::now();

        for record in self.locations.iter_mut() {
            let Location::NeedSite(site) = &mut record.value else {
                continue;
            };

            if let Some(scored) = ranked.iter().find(|scored| scored.id == site.id) {
                site.priority_score = scored.priority_score;
                record.updated_at = now;
            }
        }
    }
}

impl SnapshotSource for ReliefStore {
    fn fetch_all_locations(&self) -> anyhow::Result<Vec<Location>> {
        Ok(self.locations.iter().map(|record| record.value.clone()).collect())
    }

    fn fetch_all_road_segments(&self) -> anyhow::Result<Vec<RoadSegment>> {
        Ok(self
            .road_segments
            .iter()
            .map(|record| record.value.clone())
            .collect())
    }
}

pub fn load_seed_file(path: &Path) -> anyhow::Result<ReliefStore> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let snapshot: GraphSnapshot = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot parse {}", path.display()))?;

    snapshot
        .validate()
        .with_context(|| format!("Invalid snapshot in {}", path.display()))?;

    info!(
        locations = snapshot.locations.len(),
        road_segments = snapshot.road_segments.len(),
        "loaded seed snapshot from {}",
        path.display()
    );

    Ok(ReliefStore::from_snapshot(snapshot))
}
