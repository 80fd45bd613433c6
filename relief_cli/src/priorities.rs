use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use relief_core::{
    constants::{ACCESS_WEIGHT, PEOPLE_WEIGHT, SEVERITY_WEIGHT},
    json::types::JsonRankedNeedSite,
    model::need_site::NeedSite,
    priority::{priority_level::PriorityLevel, priority_weights::PriorityWeights},
    snapshot_source::SnapshotSource,
};
use tracing::info;

use crate::file_utils::SnapshotFile;

#[derive(Args)]
pub struct PrioritiesArgs {
    /// Snapshot JSON file
    #[arg(short, long)]
    input: PathBuf,

    #[arg(long, default_value_t = SEVERITY_WEIGHT)]
    severity_weight: f64,

    #[arg(long, default_value_t = PEOPLE_WEIGHT)]
    people_weight: f64,

    #[arg(long, default_value_t = ACCESS_WEIGHT)]
    access_weight: f64,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: PrioritiesArgs) -> Result<(), anyhow::Error> {
    let weights = PriorityWeights::new(args.severity_weight, args.people_weight, args.access_weight)?;
    let snapshot = SnapshotFile::new(&args.input).snapshot()?;

    let ranked = snapshot.compute_priorities(weights)?;
    info!("Ranked {} need sites from {:?}", ranked.len(), args.input);

    if args.json {
        let ranked: Vec<JsonRankedNeedSite> =
            ranked.into_iter().map(JsonRankedNeedSite::from).collect();
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("{}", priorities_table(&ranked));
    }

    Ok(())
}

fn priorities_table(ranked: &[NeedSite]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Rank", "Id", "Name", "Score", "Level", "Severity", "People", "Access",
    ]);

    for (index, site) in ranked.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            site.id.to_string(),
            site.name.clone(),
            format!("{:.3}", site.priority_score),
            PriorityLevel::from_score(site.priority_score).to_string(),
            site.severity.level().to_string(),
            site.people_affected.to_string(),
            site.access_difficulty.flag().to_string(),
        ]);
    }

    table
}
