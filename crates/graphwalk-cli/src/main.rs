//! `graphwalk` - load an undirected edge list, print its representations,
//! and search it depth-first or breadth-first.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use figment::providers::Serialized;
use graphwalk_core::edge_source::read_edges;
use graphwalk_core::graph::{format_visited, Representation};
use graphwalk_core::{Error, Graph, Strategy, WalkConfig};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status when the goal cannot be reached from the start vertex.
const EXIT_NOT_FOUND: u8 = 2;

/// graphwalk - adjacency list/matrix printing and DFS/BFS path search
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "GRAPHWALK_CONFIG")]
    config: Option<PathBuf>,

    /// Edge-list file, one `(u, v)` pair per line
    #[arg(short, long)]
    edges: Option<PathBuf>,

    /// Number of vertices
    #[arg(short = 'n', long)]
    vertices: Option<usize>,

    /// Number of edges the file should contain (warns on mismatch)
    #[arg(long)]
    expected_edges: Option<usize>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the adjacency list with sorted neighbors
    List,
    /// Print the adjacency matrix row-major
    Matrix,
    /// Depth-first search from START to GOAL
    Dfs { start: usize, goal: usize },
    /// Breadth-first search from START to GOAL
    Bfs { start: usize, goal: usize },
}

/// Command-line values layered over file and environment configuration.
#[derive(Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    edges_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertex_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_edges: Option<usize>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let overrides = Overrides {
        edges_path: args.edges.clone(),
        vertex_count: args.vertices,
        expected_edges: args.expected_edges,
    };
    let figment = WalkConfig::figment(args.config.as_deref()).merge(Serialized::defaults(overrides));
    let config = WalkConfig::from_figment(&figment).context("loading configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(&args, &config)
}

fn run(args: &Args, config: &WalkConfig) -> anyhow::Result<ExitCode> {
    let (path, vertex_count) = config.require_source()?;
    let edges = read_edges(path)
        .with_context(|| format!("reading edges from {}", path.display()))?;
    tracing::info!(
        "Loaded {} edges from {} ({} vertices)",
        edges.len(),
        path.display(),
        vertex_count
    );

    if let Some(expected) = config.expected_edges {
        if expected != edges.len() {
            tracing::warn!(
                expected,
                actual = edges.len(),
                "edge count differs from expected"
            );
        }
    }

    let mut graph = Graph::new();
    match args.command {
        Command::List => {
            graph.load_adjacency_list(&edges, vertex_count)?;
            let rendered = graph.render_adjacency_list()?;
            print_representation(args.json, Representation::AdjacencyList, &rendered);
        }
        Command::Matrix => {
            graph.load_adjacency_matrix(&edges, vertex_count)?;
            let rendered = graph.render_adjacency_matrix()?;
            print_representation(args.json, Representation::AdjacencyMatrix, &rendered);
        }
        Command::Dfs { start, goal } => {
            graph.load_adjacency_list(&edges, vertex_count)?;
            return search(&graph, Strategy::DepthFirst, start, goal, args.json);
        }
        Command::Bfs { start, goal } => {
            graph.load_adjacency_list(&edges, vertex_count)?;
            return search(&graph, Strategy::BreadthFirst, start, goal, args.json);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_representation(as_json: bool, representation: Representation, rendered: &str) {
    if as_json {
        println!(
            "{}",
            json!({ "representation": representation, "rendered": rendered })
        );
    } else {
        println!("{rendered}");
    }
}

fn search(
    graph: &Graph,
    strategy: Strategy,
    start: usize,
    goal: usize,
    as_json: bool,
) -> anyhow::Result<ExitCode> {
    let traversal = graph.traverse(strategy, start, goal)?;
    let found = traversal.is_found();

    if as_json {
        let report = json!({
            "traversal": &traversal,
            "path": traversal.path().ok(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match traversal.render() {
            Ok(line) => println!("{line}"),
            Err(err @ Error::GoalUnreachable { .. }) => {
                println!("{}", format_visited(traversal.visited_order()));
                eprintln!("Node not found: {err}");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NOT_FOUND)
    })
}
