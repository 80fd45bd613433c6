use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::{PriorityError, RouteError, ValidationError},
    model::{
        center::Center, location::Location, need_site::NeedSite, resources::Resources,
        road_segment::RoadSegment,
    },
    priority::{
        allocation_summary::AllocationSummary, priority_scorer::PriorityScorer,
        priority_weights::PriorityWeights,
    },
    route_graph::RouteGraph,
    routing::{
        routing_path::RouteResult, routing_request::RoutingRequest,
        shortest_path_solver::ShortestPathSolver,
    },
};

/// Point-in-time copy of every location and road segment.
///
/// Each computation derives what it needs from a snapshot it owns and nothing is cached
/// between calls.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", rename = "GraphSnapshot")]
pub struct GraphSnapshot {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub road_segments: Vec<RoadSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStatistics {
    pub centers: usize,
    #[serde(rename = "areas")]
    pub need_sites: usize,
    #[serde(rename = "roads")]
    pub road_segments: usize,
    #[serde(rename = "blockedRoads")]
    pub blocked_road_segments: usize,
    #[serde(rename = "totalPeople")]
    pub total_people_affected: u64,
    pub total_resources: Resources,
}

impl GraphSnapshot {
    pub fn new(locations: Vec<Location>, road_segments: Vec<RoadSegment>) -> Self {
        GraphSnapshot {
            locations,
            road_segments,
        }
    }

    pub fn centers(&self) -> impl Iterator<Item = &Center> {
        self.locations.iter().filter_map(Location::as_center)
    }

    pub fn need_sites(&self) -> impl Iterator<Item = &NeedSite> {
        self.locations.iter().filter_map(Location::as_need_site)
    }

    /// Checks every location and road segment, then that the road network can be built.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for location in &self.locations {
            location.validate()?;
        }

        for segment in &self.road_segments {
            segment.validate()?;
        }

        RouteGraph::build(&self.locations, &self.road_segments)?;

        Ok(())
    }

    /// Need sites with fresh priority scores, highest first. The snapshot itself is left as is.
    #[instrument(skip_all)]
    pub fn compute_priorities(
        &self,
        weights: PriorityWeights,
    ) -> Result<Vec<NeedSite>, PriorityError> {
        PriorityScorer::new(weights).rank(self.need_sites().cloned().collect())
    }

    #[instrument(skip(self), fields(start = %request.start, end = %request.end))]
    pub fn route(&self, request: &RoutingRequest) -> Result<RouteResult, RouteError> {
        let graph = RouteGraph::build(&self.locations, &self.road_segments)?;
        ShortestPathSolver::new(&graph).solve(request)
    }

    pub fn statistics(&self) -> SnapshotStatistics {
        SnapshotStatistics {
            centers: self.centers().count(),
            need_sites: self.need_sites().count(),
            road_segments: self.road_segments.len(),
            blocked_road_segments: self
                .road_segments
                .iter()
                .filter(|segment| segment.is_blocked)
                .count(),
            total_people_affected: self
                .need_sites()
                .map(|site| u64::from(site.people_affected))
                .sum(),
            total_resources: self.centers().map(|center| center.resources).sum(),
        }
    }

    pub fn allocation_summary(&self) -> AllocationSummary {
        AllocationSummary::new(self.centers(), self.need_sites())
    }
}
