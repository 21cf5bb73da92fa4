// CSV edge lists in, CSV distance tables out.
//
// Input rows are `node_id,neighbor_id,weight` after a header line. Node ids are
// arbitrary u64 values; they are remapped to dense indices in order of first
// appearance.
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Writer};
use fnv::FnvHashMap;
use log::{debug, info};

use crate::dijkstra::ShortestPaths;
use crate::error::{Result, SsspError};
use crate::graph::{Graph, NodeIndex, Weight};

/// A graph read from CSV together with the mapping back to the file's ids.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph,
    idx_to_id: Vec<u64>,
    id_to_idx: FnvHashMap<u64, NodeIndex>,
}

impl LoadedGraph {
    pub fn index_of(&self, id: u64) -> Result<NodeIndex> {
        self.id_to_idx
            .get(&id)
            .copied()
            .ok_or(SsspError::UnknownNodeId(id))
    }

    pub fn id_of(&self, idx: NodeIndex) -> u64 {
        self.idx_to_id[idx]
    }
}

fn parse_field<T: std::str::FromStr>(record: &csv::StringRecord, i: usize, field: &'static str) -> Result<T> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let raw = record.get(i).ok_or_else(|| SsspError::Parse {
        line,
        field,
        value: String::new(),
    })?;
    raw.trim().parse().map_err(|_| SsspError::Parse {
        line,
        field,
        value: raw.to_string(),
    })
}

pub fn read_edge_list<R: io::Read>(reader: R, undirected: bool) -> Result<LoadedGraph> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut idx_to_id: Vec<u64> = Vec::new();
    let mut id_to_idx: FnvHashMap<u64, NodeIndex> = FnvHashMap::default();
    let mut intern = |id: u64| -> NodeIndex {
        *id_to_idx.entry(id).or_insert_with(|| {
            idx_to_id.push(id);
            idx_to_id.len() - 1
        })
    };

    let mut edges = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let node_id: u64 = parse_field(&record, 0, "node_id")?;
        let neighbor_id: u64 = parse_field(&record, 1, "neighbor_id")?;
        let weight: Weight = parse_field(&record, 2, "weight")?;
        edges.push((intern(node_id), intern(neighbor_id), weight));
    }

    let node_count = idx_to_id.len();
    debug!("parsed {} edge rows over {} distinct node ids", edges.len(), node_count);

    let graph = if undirected {
        Graph::from_undirected_edges(node_count, &edges)?
    } else {
        Graph::from_edges(node_count, &edges)?
    };
    info!(
        "Graph: {} nodes, {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(LoadedGraph {
        graph,
        idx_to_id,
        id_to_idx,
    })
}

pub fn read_edge_list_from_path<P: AsRef<Path>>(path: P, undirected: bool) -> Result<LoadedGraph> {
    let path = path.as_ref();
    info!("reading edge list from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_edge_list(io::BufReader::new(file), undirected)
}

/// Writes `node_id,distance` rows sorted by distance. Unreachable nodes are
/// written as `inf` only when `include_unreachable` is set. Returns the number
/// of rows written.
pub fn write_distances<W: io::Write, F: Fn(NodeIndex) -> u64>(
    writer: W,
    paths: &ShortestPaths,
    id_of: F,
    include_unreachable: bool,
) -> Result<usize> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["node_id", "distance"])?;

    let mut dist_with_idx: Vec<(NodeIndex, Weight)> = paths.distances().iter().copied().enumerate().collect();
    dist_with_idx.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut written = 0;
    for (idx, d) in dist_with_idx {
        if d.is_finite() || include_unreachable {
            let val = if d.is_finite() {
                format!("{:.6}", d)
            } else {
                String::from("inf")
            };
            wtr.write_record(&[id_of(idx).to_string(), val])?;
            written += 1;
        }
    }
    wtr.flush()?;
    Ok(written)
}
