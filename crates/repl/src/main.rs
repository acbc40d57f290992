//! Interactive shell around `path_core`
use std::path::{Path, PathBuf};

use log::info;
use path_core::prelude::*;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.connections.to_string()))
}

/// Replace the current graph with the one stored in a file
fn load(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let Some(file) = args.get_one::<PathBuf>("file") else {
        return Ok(None);
    };

    match load_connections(file) {
        Ok(connections) => {
            context.connections = connections;
            Ok(Some(context.connections.to_string()))
        }
        Err(e) => Ok(Some(format!("Could not load {}: {:#}", file.display(), e))),
    }
}

/// Switch back to the sample graph
fn sample(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    context.connections = sample_graph();
    Ok(Some(context.connections.to_string()))
}

fn query(args: &ArgMatches) -> std::result::Result<(String, String), String> {
    let node = |name: &str| -> std::result::Result<String, String> {
        let text = args.get_one::<String>(name).map(String::as_str).unwrap_or("");
        parse_node(text).map_err(|e| format!("{}: {}", name, e))
    };
    Ok((node("src")?, node("dst")?))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (src, dst) = match query(&args) {
        Ok(query) => query,
        Err(e) => return Ok(Some(e)),
    };

    let highlighted = highlight_path(&src, &dst, &context.connections);
    Ok(Some(highlighted.caption().to_string()))
}

fn run_heap_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (src, dst) = match query(&args) {
        Ok(query) => query,
        Err(e) => return Ok(Some(e)),
    };

    let mut dijkstra = HeapDijkstra::new(&context.connections);
    let sp = dijkstra.search(&src, &dst);

    if sp.is_reachable() {
        Ok(Some(format!(
            "Distance: {}\nPath: {}\n{}",
            sp.weight, sp, dijkstra.stats
        )))
    } else {
        Ok(Some(format!("No path found\n{}", dijkstra.stats)))
    }
}

fn export_dot(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (src, dst) = match query(&args) {
        Ok(query) => query,
        Err(e) => return Ok(Some(e)),
    };
    let Some(file) = args.get_one::<PathBuf>("file") else {
        return Ok(None);
    };

    let highlighted = highlight_path(&src, &dst, &context.connections);
    if let Err(e) = std::fs::write(file, highlighted.to_dot()) {
        return Ok(Some(format!("Could not write {}: {}", file.display(), e)));
    }
    info!("Wrote {:?}", file);

    Ok(Some(format!("{}\nWritten to {}", highlighted.caption(), file.display())))
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::seq::SliceRandom;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let nodes: Vec<&String> = context.connections.nodes().into_iter().collect();
    if nodes.is_empty() {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let mut res = String::new();
    for _ in 0..n {
        let (Some(src), Some(dst)) = (nodes.choose(&mut rng), nodes.choose(&mut rng)) else {
            break;
        };

        let mut dense = Dijkstra::new(&context.connections);
        let sp = dense.search(src, dst);
        let mut heap = HeapDijkstra::new(&context.connections);
        heap.search(src, dst);

        res.push_str(&format!(
            "{} -> {} ({}): dense {:?}, heap {:?}\n",
            src,
            dst,
            sp.weight,
            dense.stats.duration.unwrap_or_default(),
            heap.stats.duration.unwrap_or_default()
        ));
    }

    Ok(Some(res))
}

struct Context {
    connections: Connections<String>,
}

impl Context {
    fn new(connections: Connections<String>) -> Self {
        Self { connections }
    }
}

fn node_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).required(true).help(help)
}

fn main() -> Result<()> {
    env_logger::init();

    // Init graph
    let connections = match std::env::args().nth(1) {
        Some(path) => match load_connections(Path::new(&path)) {
            Ok(connections) => connections,
            Err(e) => {
                eprintln!("Could not load {}: {:#}. Using the sample graph", path, e);
                sample_graph()
            }
        },
        None => sample_graph(),
    };
    let context = Context::new(connections);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to find and highlight shortest paths")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("load")
                .arg(
                    Arg::new("file")
                        .value_parser(value_parser!(PathBuf))
                        .required(true)
                        .help("Edge map or .csv file"),
                )
                .about("Load a graph from a file"),
            load,
        )
        .with_command(
            Command::new("sample").about("Load the sample graph"),
            sample,
        )
        .with_command(
            Command::new("path")
                .arg(node_arg("src", "Source node"))
                .arg(node_arg("dst", "Destination node"))
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("heap")
                .arg(node_arg("src", "Source node"))
                .arg(node_arg("dst", "Destination node"))
                .about("Calculate shortest path using the binary heap Dijkstra"),
            run_heap_dijkstra,
        )
        .with_command(
            Command::new("dot")
                .arg(node_arg("src", "Source node"))
                .arg(node_arg("dst", "Destination node"))
                .arg(
                    Arg::new("file")
                        .value_parser(value_parser!(PathBuf))
                        .required(true)
                        .help("Output file"),
                )
                .about("Write the highlighted shortest path as Graphviz DOT"),
            export_dot,
        )
        .with_command(
            Command::new("random")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest paths calculations"),
            measure_dijkstra,
        );

    repl.run()
}
