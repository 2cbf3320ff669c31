//! Aggregation strategies for the all-reduce collective.
//!
//! Both strategies deliver `combine`-folded contributions from every node to
//! every node, and both double as the round barrier. Picking one is purely a
//! transport concern; the engine never sees the difference.

use crate::error::CommError;
use crate::mesh::ThreadComm;
use crate::Communicator;

/// How contributions are aggregated across nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReduceStrategy {
    /// Every node talks to rank 0 directly: gather, fold, broadcast.
    #[default]
    Flat,
    /// Binomial tree: up-sweep folds toward rank 0, down-sweep fans out.
    Tree,
}

const ROOT: usize = 0;

pub(crate) fn flat(
    comm: &ThreadComm,
    value: f32,
    combine: fn(f32, f32) -> f32,
) -> Result<f32, CommError> {
    let nodes = comm.nodes();
    if nodes == 1 {
        return Ok(value);
    }
    if comm.rank() == ROOT {
        let mut acc = value;
        for peer in 1..nodes {
            acc = combine(acc, comm.recv_scalar(peer)?);
        }
        for peer in 1..nodes {
            comm.send_scalar(peer, acc)?;
        }
        Ok(acc)
    } else {
        comm.send_scalar(ROOT, value)?;
        comm.recv_scalar(ROOT)
    }
}

pub(crate) fn tree(
    comm: &ThreadComm,
    value: f32,
    combine: fn(f32, f32) -> f32,
) -> Result<f32, CommError> {
    let nodes = comm.nodes();
    let rank = comm.rank();
    let mut acc = value;

    // Up-sweep: at distance d, ranks that are odd multiples of d fold their
    // subtree into the even multiple below them and wait for the result.
    let mut dist = 1;
    let mut parent_dist = None;
    while dist < nodes {
        if rank % (2 * dist) == 0 {
            let child = rank + dist;
            if child < nodes {
                acc = combine(acc, comm.recv_scalar(child)?);
            }
        } else {
            comm.send_scalar(rank - dist, acc)?;
            parent_dist = Some(dist);
            break;
        }
        dist *= 2;
    }

    // Down-sweep: the folded result travels back along the same edges.
    let mut span = match parent_dist {
        Some(d) => {
            acc = comm.recv_scalar(rank - d)?;
            d
        }
        None => dist,
    };
    span /= 2;
    while span >= 1 {
        let child = rank + span;
        if child < nodes {
            comm.send_scalar(child, acc)?;
        }
        span /= 2;
    }
    Ok(acc)
}
