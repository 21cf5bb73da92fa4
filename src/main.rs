use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::time::Instant;

use dijkstra_sssp::csv_io::{read_edge_list_from_path, write_distances, LoadedGraph};
use dijkstra_sssp::{compute_sssp, reference, Graph, NodeIndex, ShortestPaths};

#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(about = "Run Dijkstra from a source node over a CSV edge list (node_id,neighbor_id,weight) or the built-in 9-node example.", long_about = None)]
struct Cli {
    /// Path to the .csv edge list
    #[arg(short, long, conflicts_with = "reference")]
    csv: Option<String>,

    /// Use the built-in 9-node textbook graph instead of a CSV file
    #[arg(long, default_value_t = false)]
    reference: bool,

    /// Source node id to run from (a CSV node id, or an index for --reference)
    #[arg(short, long, default_value_t = 0)]
    source: u64,

    /// Treat every CSV edge as undirected
    #[arg(long, default_value_t = false)]
    undirected: bool,

    /// Output CSV (node_id, distance). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable nodes in output with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,

    /// Number of timed runs from the same source
    #[arg(short, long, default_value_t = 1)]
    num_runs: usize,
}

enum Input {
    Csv(LoadedGraph),
    Reference(Graph),
}

impl Input {
    fn graph(&self) -> &Graph {
        match self {
            Input::Csv(loaded) => &loaded.graph,
            Input::Reference(graph) => graph,
        }
    }

    fn source_index(&self, id: u64) -> Result<NodeIndex> {
        match self {
            Input::Csv(loaded) => Ok(loaded.index_of(id)?),
            Input::Reference(_) => Ok(usize::try_from(id)?),
        }
    }

    fn id_of(&self, idx: NodeIndex) -> u64 {
        match self {
            Input::Csv(loaded) => loaded.id_of(idx),
            Input::Reference(_) => idx as u64,
        }
    }
}

fn print_summary(cli: &Cli, paths: &ShortestPaths) {
    let dist = paths.distances();
    if dist.len() <= 32 {
        println!("{:?}", dist);
    }
    let reachable = paths.reachable_count();
    println!("Nodes: {}", dist.len());
    println!("Reachable from {}: {}", cli.source, reachable);
    if reachable > 0 {
        let maxd = dist
            .iter()
            .copied()
            .filter(|x| x.is_finite())
            .fold(0.0_f64, f64::max);
        println!("Max finite distance: {:.2}", maxd);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = match (&cli.csv, cli.reference) {
        (Some(path), _) => Input::Csv(
            read_edge_list_from_path(path, cli.undirected).with_context(|| format!("loading {}", path))?,
        ),
        (None, true) => Input::Reference(reference::textbook_graph()),
        (None, false) => bail!("either --csv <path> or --reference is required"),
    };

    let src_idx = input
        .source_index(cli.source)
        .with_context(|| format!("resolving source {}", cli.source))?;

    let mut duration_millis = Vec::with_capacity(cli.num_runs);
    let mut result = None;
    for _ in 0..cli.num_runs.max(1) {
        let now = Instant::now();
        let paths = compute_sssp(input.graph(), src_idx)?;
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
        result = Some(paths);
    }
    info!("run times (ms): {:?}", duration_millis);
    if duration_millis.len() > 1 {
        let mean = duration_millis.iter().sum::<f64>() / duration_millis.len() as f64;
        println!("{} runs, mean {:.3} ms", duration_millis.len(), mean);
    }

    let Some(paths) = result else {
        bail!("no run completed");
    };

    if let Some(out_path) = &cli.out {
        let file = File::create(out_path).with_context(|| format!("creating CSV {}", out_path))?;
        let written = write_distances(file, &paths, |i| input.id_of(i), cli.include_unreachable)?;
        println!("Wrote distances for {} nodes to {}", written, out_path);
    } else {
        print_summary(&cli, &paths);
    }

    Ok(())
}
