use crate::graph::NodeIndex;

/// Errors raised while building a graph or running a search over it.
#[derive(thiserror::Error, Debug)]
pub enum SsspError {
    #[error("source node {node} is out of range for a graph with {node_count} nodes")]
    InvalidSource { node: NodeIndex, node_count: usize },

    #[error("{targets} target rows but {weights} weight rows")]
    RowCountMismatch { targets: usize, weights: usize },

    #[error("node {node} has {targets} targets but {weights} weights")]
    RowLengthMismatch {
        node: NodeIndex,
        targets: usize,
        weights: usize,
    },

    #[error("edge {from} -> {to} points outside a graph with {node_count} nodes")]
    TargetOutOfRange {
        from: NodeIndex,
        to: NodeIndex,
        node_count: usize,
    },

    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: NodeIndex,
        to: NodeIndex,
        weight: f64,
    },

    #[error("edge {from} -> {to} has non-finite weight {weight}")]
    NonFiniteWeight {
        from: NodeIndex,
        to: NodeIndex,
        weight: f64,
    },

    #[error("unknown node id {0}")]
    UnknownNodeId(u64),

    #[error("line {line}: could not parse {field} from {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SsspError>;
