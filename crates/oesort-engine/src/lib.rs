//! Distributed odd-even transposition sort engine.
//!
//! A global array of floats is split contiguously across a fixed set of
//! nodes. Each node sorts its partition locally once, then the nodes run
//! rounds of pairwise merge-exchanges with alternating odd/even neighbors
//! until a global reduction reports that no partition changed. Partition
//! boundaries never move: node `i` ends up holding the `i`-th block of the
//! globally sorted sequence.
//!
//! The engine is transport-agnostic; it drives any [`comm::Communicator`].

pub mod engine;
pub mod error;
pub mod merge;
pub mod partition;
pub mod schedule;

pub use engine::{OddEvenSorter, SortStats};
pub use error::EngineError;
pub use partition::{Partition, RankTable};
pub use schedule::Phase;
