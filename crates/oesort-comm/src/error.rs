use std::fmt;

/// Errors from node-to-node communication. All of them are fatal for the
/// whole run; there is no retry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommError {
    /// Peer index is out of range, or a node addressed itself.
    PeerOutOfRange { peer: usize, nodes: usize },
    /// Received payload length disagrees with the expected length.
    LengthMismatch { expected: usize, got: usize },
    /// The peer's endpoint was dropped mid-run.
    Disconnected { peer: usize },
}

impl fmt::Display for CommError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeerOutOfRange { peer, nodes } => {
                write!(f, "peer {} out of range for {} nodes", peer, nodes)
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "payload length mismatch: expected {}, got {}", expected, got)
            }
            Self::Disconnected { peer } => write!(f, "peer {} disconnected", peer),
        }
    }
}

impl std::error::Error for CommError {}
