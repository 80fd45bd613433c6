use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use relief_core::{
    priority::allocation_summary::AllocationSummary, snapshot::SnapshotStatistics,
    snapshot_source::SnapshotSource,
};

use crate::file_utils::SnapshotFile;

#[derive(Args)]
pub struct StatisticsArgs {
    /// Snapshot JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn run(args: StatisticsArgs) -> Result<(), anyhow::Error> {
    let snapshot = SnapshotFile::new(&args.input).snapshot()?;
    let statistics = snapshot.statistics();
    let allocation = snapshot.allocation_summary();

    if args.json {
        let json = serde_json::json!({
            "statistics": statistics,
            "allocation": allocation,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", statistics_table(&statistics));
        println!("{}", allocation_table(&allocation));
    }

    Ok(())
}

fn statistics_table(statistics: &SnapshotStatistics) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["", "Count"]);

    let resources = statistics.total_resources;
    let rows = [
        ("Centers", statistics.centers as u64),
        ("Need sites", statistics.need_sites as u64),
        ("Road segments", statistics.road_segments as u64),
        ("Blocked road segments", statistics.blocked_road_segments as u64),
        ("People affected", statistics.total_people_affected),
        ("Food on hand", u64::from(resources.food)),
        ("Water on hand", u64::from(resources.water)),
        ("Medical on hand", u64::from(resources.medical)),
    ];

    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value.to_string()]);
    }

    table
}

fn allocation_table(allocation: &AllocationSummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Resource", "Required", "Available", "Coverage"]);

    for coverage in &allocation.coverage {
        table.add_row(vec![
            coverage.kind.to_string(),
            coverage.required.to_string(),
            coverage.available.to_string(),
            coverage
                .coverage
                .map_or_else(|| String::from("-"), |ratio| format!("{:.0}%", ratio * 100.0)),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/seed.json");
        let snapshot = SnapshotFile::new(path).snapshot().unwrap();

        let statistics = statistics_table(&snapshot.statistics()).to_string();
        let allocation = allocation_table(&snapshot.allocation_summary()).to_string();

        assert!(statistics.contains("1450"));
        assert!(allocation.contains("medical"));
        assert!(allocation.contains("140%"));
    }
}
