//! Node-to-node communication for the sort engine.
//!
//! The engine talks to its peers through the [`Communicator`] trait: a
//! rendezvous `exchange` between two specific nodes, plus an `all_reduce`
//! collective over every node. The in-process implementation
//! ([`ChannelMesh`]/[`ThreadComm`]) runs one node per OS thread over bounded
//! channels; other transports can slot in behind the same trait.

pub mod error;
pub mod mesh;
pub mod reduce;

pub use error::CommError;
pub use mesh::{ChannelMesh, ThreadComm};
pub use reduce::ReduceStrategy;

/// Synchronous message passing between the nodes of one sort run.
pub trait Communicator {
    /// This node's rank, in `[0, nodes)`.
    fn rank(&self) -> usize;

    /// Number of participating nodes.
    fn nodes(&self) -> usize;

    /// Matched send-and-receive with `peer`.
    ///
    /// Completes once both peers have called `exchange` with each other:
    /// `send` is delivered to the peer and the peer's payload fills `recv`.
    /// Neither side has to sequence send before receive, so two nodes may
    /// exchange with each other simultaneously without deadlocking. Payload
    /// lengths are agreed out of band (via the rank table); a mismatch is a
    /// fatal [`CommError::LengthMismatch`].
    fn exchange(&mut self, peer: usize, send: &[f32], recv: &mut [f32]) -> Result<(), CommError>;

    /// Reduce `value` across all nodes with the associative, commutative
    /// `combine`, delivering the result to every node. Acts as a barrier.
    fn all_reduce(&mut self, value: f32, combine: fn(f32, f32) -> f32) -> Result<f32, CommError>;
}
