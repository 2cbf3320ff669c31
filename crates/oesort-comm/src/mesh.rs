//! In-process transport: one node per OS thread, pairwise bounded channels.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

use crate::error::CommError;
use crate::reduce::{self, ReduceStrategy};
use crate::Communicator;

/// At most one frame in flight per direction between a pair of nodes.
/// Depositing into the link before receiving keeps a matched pair of
/// `exchange` calls free of send-before-receive ordering.
const LINK_DEPTH: usize = 1;

struct Link {
    tx: SyncSender<Vec<f32>>,
    rx: Receiver<Vec<f32>>,
}

/// One node's endpoint of a fully connected [`ChannelMesh`].
///
/// Owned exclusively by that node's thread; holds one [`Link`] per peer.
pub struct ThreadComm {
    rank: usize,
    links: Vec<Option<Link>>,
    strategy: ReduceStrategy,
}

/// Builder for the fully connected in-process mesh.
pub struct ChannelMesh;

impl ChannelMesh {
    /// Connect `nodes` endpoints with the default flat reduction strategy.
    pub fn connect(nodes: usize) -> Vec<ThreadComm> {
        Self::connect_with(nodes, ReduceStrategy::Flat)
    }

    /// Connect `nodes` endpoints, one per rank, in rank order.
    pub fn connect_with(nodes: usize, strategy: ReduceStrategy) -> Vec<ThreadComm> {
        assert!(nodes > 0, "mesh needs at least one node");
        log::debug!("[mesh] connecting {} nodes ({:?} reduce)", nodes, strategy);

        let mut links: Vec<Vec<Option<Link>>> = (0..nodes)
            .map(|_| (0..nodes).map(|_| None).collect())
            .collect();
        for a in 0..nodes {
            for b in (a + 1)..nodes {
                let (a_to_b, from_a) = sync_channel(LINK_DEPTH);
                let (b_to_a, from_b) = sync_channel(LINK_DEPTH);
                links[a][b] = Some(Link { tx: a_to_b, rx: from_b });
                links[b][a] = Some(Link { tx: b_to_a, rx: from_a });
            }
        }

        links
            .into_iter()
            .enumerate()
            .map(|(rank, links)| ThreadComm { rank, links, strategy })
            .collect()
    }
}

impl ThreadComm {
    fn link(&self, peer: usize) -> Result<&Link, CommError> {
        let nodes = self.links.len();
        if peer >= nodes || peer == self.rank {
            return Err(CommError::PeerOutOfRange { peer, nodes });
        }
        self.links[peer]
            .as_ref()
            .ok_or(CommError::PeerOutOfRange { peer, nodes })
    }

    pub(crate) fn send_frame(&self, peer: usize, frame: Vec<f32>) -> Result<(), CommError> {
        self.link(peer)?
            .tx
            .send(frame)
            .map_err(|_| CommError::Disconnected { peer })
    }

    pub(crate) fn recv_frame(&self, peer: usize, expected: usize) -> Result<Vec<f32>, CommError> {
        let frame = self
            .link(peer)?
            .rx
            .recv()
            .map_err(|_| CommError::Disconnected { peer })?;
        if frame.len() != expected {
            return Err(CommError::LengthMismatch {
                expected,
                got: frame.len(),
            });
        }
        Ok(frame)
    }

    pub(crate) fn send_scalar(&self, peer: usize, value: f32) -> Result<(), CommError> {
        self.send_frame(peer, vec![value])
    }

    pub(crate) fn recv_scalar(&self, peer: usize) -> Result<f32, CommError> {
        Ok(self.recv_frame(peer, 1)?[0])
    }
}

impl Communicator for ThreadComm {
    fn rank(&self) -> usize {
        self.rank
    }

    fn nodes(&self) -> usize {
        self.links.len()
    }

    fn exchange(&mut self, peer: usize, send: &[f32], recv: &mut [f32]) -> Result<(), CommError> {
        self.send_frame(peer, send.to_vec())?;
        let frame = self.recv_frame(peer, recv.len())?;
        recv.copy_from_slice(&frame);
        Ok(())
    }

    fn all_reduce(&mut self, value: f32, combine: fn(f32, f32) -> f32) -> Result<f32, CommError> {
        match self.strategy {
            ReduceStrategy::Flat => reduce::flat(self, value, combine),
            ReduceStrategy::Tree => reduce::tree(self, value, combine),
        }
    }
}
