use std::fmt;

use comm::CommError;

/// Fatal engine failures. Any of these aborts the whole distributed run;
/// there is no partial-result salvage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Local buffer length disagrees with the rank table.
    PartitionMismatch {
        rank: usize,
        expected: usize,
        got: usize,
    },
    /// Communicator and rank table disagree on the node count.
    NodeCountMismatch { table: usize, comm: usize },
    /// Transport failure.
    Comm(CommError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartitionMismatch {
                rank,
                expected,
                got,
            } => write!(
                f,
                "node {}: local buffer holds {} elements, partition expects {}",
                rank, got, expected
            ),
            Self::NodeCountMismatch { table, comm } => write!(
                f,
                "rank table sized for {} nodes, communicator has {}",
                table, comm
            ),
            Self::Comm(e) => write!(f, "communication failed: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Comm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CommError> for EngineError {
    fn from(e: CommError) -> Self {
        Self::Comm(e)
    }
}
