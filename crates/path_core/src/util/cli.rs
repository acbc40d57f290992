use std::path::PathBuf;

use clap::Parser;

use crate::parse::parse_node;
use crate::util::test_graphs::{SAMPLE_DESTINATION, SAMPLE_SOURCE};

#[derive(Parser, Debug)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Edge map or .csv file with the connections. Uses the sample graph if omitted
    edges: Option<PathBuf>,

    /// Source node
    #[arg(short, long, value_name = "node", default_value = SAMPLE_SOURCE)]
    source: String,

    /// Destination node
    #[arg(short, long, value_name = "node", default_value = SAMPLE_DESTINATION)]
    destination: String,

    /// Write the highlighted graph as Graphviz DOT to this file
    #[arg(long, value_name = "file")]
    dot: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub edges: Option<PathBuf>,
    pub source: String,
    pub destination: String,
    pub dot: Option<PathBuf>,
}

fn to_cfg(cli: Cli) -> anyhow::Result<Cfg> {
    Ok(Cfg {
        edges: cli.edges,
        source: parse_node(&cli.source)?,
        destination: parse_node(&cli.destination)?,
        dot: cli.dot,
    })
}

pub fn parse() -> anyhow::Result<Cfg> {
    to_cfg(Cli::parse())
}
