use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    generate::GenerateSubcommands, priorities::PrioritiesArgs, route::RouteArgs,
    statistics::StatisticsArgs,
};

mod file_utils;
mod generate;
mod priorities;
mod route;
mod statistics;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank need sites by priority score
    #[command(visible_alias = "p")]
    Priorities {
        #[command(flatten)]
        args: PrioritiesArgs,
    },
    /// Shortest route between two locations
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Counts, totals and resource coverage of a snapshot
    Statistics {
        #[command(flatten)]
        args: StatisticsArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Priorities { args }) => priorities::run(args)?,
        Some(Commands::Route { args }) => route::run(args)?,
        Some(Commands::Statistics { args }) => statistics::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
