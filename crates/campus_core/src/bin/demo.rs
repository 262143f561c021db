use std::path::PathBuf;

use anyhow::Context;
use campus_core::prelude::*;
use clap::Parser;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Start building
    #[arg(default_value = "Library South")]
    start: String,

    /// Destination building
    #[arg(default_value = "Aderhold")]
    end: String,

    /// CSV edge list (`source,target,weight`). Uses the built-in campus map if not set
    #[arg(short, long, value_name = "FILE")]
    edges: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let g = match &cli.edges {
        Some(path) => Graph::from_csv(path)?,
        None => Graph::build(campus_edges()).context("Built-in campus map is invalid")?,
    };

    let mut dijkstra = Dijkstra::new(&g);
    match dijkstra.search(&cli.start, &cli.end)? {
        PathResult::Found(sp) => {
            println!("{}", sp.nodes.join(" -> "));
            println!("Costs: {} meters", sp.weight);
        }
        PathResult::NotFound => println!("No path between {} and {}", cli.start, cli.end),
    }
    println!("{}", dijkstra.stats);

    Ok(())
}
