use std::path::PathBuf;

use clap::{Args, ValueEnum};
use comfy_table::{Table, presets::UTF8_FULL};
use relief_core::{
    json::types::JsonRouteResult,
    routing::{
        routing_path::{RouteResult, RoutingPath},
        routing_request::{RouteMetric, RoutingAlgorithm, RoutingRequest, RoutingRequestOptions},
    },
    snapshot_source::SnapshotSource,
};
use tracing::info;

use crate::file_utils::SnapshotFile;

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Distance,
    TravelTime,
}

impl From<MetricArg> for RouteMetric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Distance => RouteMetric::Distance,
            MetricArg::TravelTime => RouteMetric::TravelTime,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    FrontierScan,
    BinaryHeap,
}

impl From<AlgorithmArg> for RoutingAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::FrontierScan => RoutingAlgorithm::FrontierScan,
            AlgorithmArg::BinaryHeap => RoutingAlgorithm::BinaryHeap,
        }
    }
}

#[derive(Args)]
pub struct RouteArgs {
    /// Snapshot JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Start location id
    #[arg(long)]
    from: String,

    /// End location id
    #[arg(long)]
    to: String,

    #[arg(long, value_enum, default_value_t = MetricArg::Distance)]
    metric: MetricArg,

    #[arg(long, value_enum, default_value_t = AlgorithmArg::FrontierScan)]
    algorithm: AlgorithmArg,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let snapshot = SnapshotFile::new(&args.input).snapshot()?;

    let request = RoutingRequest::new(args.from, args.to).with_options(RoutingRequestOptions {
        metric: args.metric.into(),
        algorithm: args.algorithm.into(),
    });

    let result = snapshot.route(&request)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonRouteResult::from(result))?
        );
        return Ok(());
    }

    match result {
        RouteResult::Found(path) => {
            println!("{}", route_table(&path));
            println!(
                "Total: {} ({})",
                path.total_distance(),
                path.total_travel_time()
            );
        }
        RouteResult::NotFound => {
            info!(
                "No available path between {} and {}",
                request.start, request.end
            );
        }
    }

    Ok(())
}

fn route_table(path: &RoutingPath) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Stop", "Id", "Name", "Road", "Distance", "Travel time"]);

    for (index, point) in path.points().iter().enumerate() {
        // The leg leading into this stop, none for the start
        let leg = index.checked_sub(1).map(|leg| &path.legs()[leg]);

        table.add_row(vec![
            index.to_string(),
            point.id.to_string(),
            point.name.clone(),
            leg.map_or_else(String::new, |leg| leg.segment_id.to_string()),
            leg.map_or_else(String::new, |leg| leg.distance.to_string()),
            leg.map_or_else(String::new, |leg| leg.travel_time.to_string()),
        ]);
    }

    table
}
