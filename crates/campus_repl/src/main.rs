//! Text front end for the campus route finder
use std::path::PathBuf;

use anyhow::{anyhow, Context as _};
use campus_core::{
    error::GraphError,
    graph::{node_index, Graph},
    search::{dijkstra::Dijkstra, shortest_path::PathResult},
    statistics::average_degree,
    util::campus_map::campus_edges,
};
use clap::Parser;
use indicatif::ProgressBar;
use log::debug;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// CSV edge list (`source,target,weight`). Uses the built-in campus map if not set
    #[arg(short, long, value_name = "FILE")]
    edges: Option<PathBuf>,
}

struct Context {
    graph: Graph,
    buildings: Vec<String>,
}

impl Context {
    fn new(graph: Graph) -> Self {
        let buildings = graph.sorted_nodes().into_iter().map(String::from).collect();
        Self { graph, buildings }
    }

    /// A building is either given by name or by its number in the `buildings` list.
    fn resolve<'a>(&'a self, selection: &'a str) -> &'a str {
        match selection.parse::<usize>() {
            Ok(n) if (1..=self.buildings.len()).contains(&n) => &self.buildings[n - 1],
            _ => selection,
        }
    }

    fn route(&self, start: &str, end: &str) -> String {
        let start = self.resolve(start.trim());
        let end = self.resolve(end.trim());

        if start.is_empty() || end.is_empty() {
            return "Please select both buildings".to_string();
        }
        if start == end {
            return "Start and end must be different".to_string();
        }

        let mut dijkstra = Dijkstra::new(&self.graph);
        let result = dijkstra.search(start, end);
        debug!("{}", dijkstra.stats);

        match result {
            Ok(PathResult::Found(sp)) => {
                let mut out = String::new();
                for leg in sp.legs(&self.graph) {
                    out.push_str(&format!("{} -> {} ({} m)\n", leg.from, leg.to, leg.weight));
                }
                out.push_str(&format!("Path found! Distance: {} meters", sp.weight));
                out
            }
            Ok(PathResult::NotFound) => "No path exists between these buildings".to_string(),
            Err(GraphError::UnknownNode(name)) => format!("Unknown building: {}", name),
            Err(e) => e.to_string(),
        }
    }

    fn neighbors(&self, building: &str) -> String {
        let building = self.resolve(building.trim());
        match self.graph.neighbors(building) {
            Ok(neighbors) if neighbors.is_empty() => format!("{} has no paths", building),
            Ok(neighbors) => neighbors
                .iter()
                .map(|(name, weight)| format!("{} ({} m)", name, weight))
                .collect::<Vec<_>>()
                .join("\n"),
            Err(_) => format!("Unknown building: {}", building),
        }
    }

    fn buildings(&self) -> String {
        self.buildings
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{:>2}  {}", i + 1, name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn info(&self) -> String {
        format!(
            "Graph has {} nodes and {} edges (avg. degree {:.2})",
            self.graph.num_nodes(),
            self.graph.num_edges(),
            average_degree(&self.graph)
        )
    }
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.info()))
}

fn list_buildings(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.buildings()))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let start = args.get_one::<String>("start").map_or("", String::as_str);
    let end = args.get_one::<String>("end").map_or("", String::as_str);

    Ok(Some(context.route(start, end)))
}

fn show_neighbors(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let building = args.get_one::<String>("building").map_or("", String::as_str);

    Ok(Some(context.neighbors(building)))
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&100);
    let num_nodes = context.graph.num_nodes();
    if num_nodes == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    let mut rng = rand::thread_rng();
    let pb = ProgressBar::new(n as u64);

    let mut found = 0;
    let mut total = std::time::Duration::ZERO;
    for _ in 0..n {
        let src = node_index(rng.gen_range(0..num_nodes));
        let dst = node_index(rng.gen_range(0..num_nodes));

        let mut dijkstra = Dijkstra::new(&context.graph);
        if dijkstra.search_by_index(src, dst).is_found() {
            found += 1;
        }
        total += dijkstra.stats.duration.unwrap_or_default();
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Some(format!(
        "{} queries, {} paths found, avg. query time: {:?}",
        n,
        found,
        total / n.max(1) as u32
    )))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let graph = match &cli.edges {
        Some(path) => Graph::from_csv(path)?,
        None => Graph::build(campus_edges()).context("Built-in campus map is invalid")?,
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Campus Navigator")
        .with_version("v0.1.0")
        .with_description("Find the shortest walking route between campus buildings")
        .with_banner(
            "Campus Navigator. Quote names with spaces: route \"Library South\" Aderhold",
        )
        .with_history(PathBuf::from(".campus_history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("buildings").about("List all buildings with their numbers"),
            list_buildings,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("start")
                        .required(true)
                        .help("Start building (name or number)"),
                )
                .arg(
                    Arg::new("end")
                        .required(true)
                        .help("Destination building (name or number)"),
                )
                .about("Find the shortest path between two buildings"),
            run_route,
        )
        .with_command(
            Command::new("neighbors")
                .arg(
                    Arg::new("building")
                        .required(true)
                        .help("Building (name or number)"),
                )
                .about("List buildings reachable over a single path"),
            show_neighbors,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest paths calculations"),
            measure_dijkstra,
        );

    repl.run().map_err(|e| anyhow!("{}", e))
}
