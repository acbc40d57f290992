use anyhow::Context;
use log::info;
use path_core::prelude::*;
use path_core::util::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse()?;

    let connections = match &cfg.edges {
        Some(path) => load_connections(path)?,
        None => {
            info!("No edge file given, using the sample graph");
            sample_graph()
        }
    };

    let highlighted = highlight_path(&cfg.source, &cfg.destination, &connections);
    println!("{}", highlighted.caption());

    if let Some(path) = &cfg.dot {
        std::fs::write(path, highlighted.to_dot())
            .with_context(|| format!("Could not write {}", path.display()))?;
        info!("Wrote {:?}", path);
    }

    Ok(())
}
