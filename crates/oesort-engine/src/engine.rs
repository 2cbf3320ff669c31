//! Per-node driver: local sort, phase loop, convergence detection.

use comm::Communicator;
use voracious_radix_sort::RadixSort;

use crate::error::EngineError;
use crate::merge::{merge_keep_high, merge_keep_low};
use crate::partition::RankTable;
use crate::schedule::Phase;

/// Counters for one node's run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Rounds executed, including the final all-quiet round.
    pub rounds: usize,
    /// Boundary probes exchanged.
    pub probes: usize,
    /// Full-partition exchanges performed.
    pub bulk_exchanges: usize,
}

/// One node's sort engine.
///
/// Owns the scratch and receive buffers, sized once to the largest partition
/// and reused across all iterations. Several engines can coexist in one
/// process; nothing here is global.
pub struct OddEvenSorter {
    table: RankTable,
    scratch: Vec<f32>,
    incoming: Vec<f32>,
}

impl OddEvenSorter {
    pub fn new(table: RankTable) -> Self {
        let max = table.max_len();
        Self {
            scratch: vec![0.0; max],
            incoming: vec![0.0; max],
            table,
        }
    }

    pub fn table(&self) -> &RankTable {
        &self.table
    }

    /// Sort `local` into its place in the global order.
    ///
    /// Blocks until every node's partition has settled. On return `local`
    /// holds this node's block of the globally sorted sequence, sorted
    /// ascending, with its original length.
    pub fn run<C: Communicator>(
        &mut self,
        comm: &mut C,
        local: &mut [f32],
    ) -> Result<SortStats, EngineError> {
        let rank = comm.rank();
        let nodes = comm.nodes();
        if nodes != self.table.nodes() {
            return Err(EngineError::NodeCountMismatch {
                table: self.table.nodes(),
                comm: nodes,
            });
        }
        let expected = self.table.len_of(rank);
        if local.len() != expected {
            return Err(EngineError::PartitionMismatch {
                rank,
                expected,
                got: local.len(),
            });
        }

        local.voracious_sort();

        let mut stats = SortStats::default();
        let mut round = 1usize;
        loop {
            let odd = self.merge_exchange(comm, Phase::Odd, local, &mut stats)?;
            let even = self.merge_exchange(comm, Phase::Even, local, &mut stats)?;
            stats.rounds = round;
            // `nodes` rounds always suffice to sort the transposition
            // network, so the collective check only starts after that.
            if round > nodes {
                let changed = odd || even;
                let any = comm.all_reduce(if changed { 1.0 } else { 0.0 }, f32::max)?;
                if any == 0.0 {
                    log::debug!("[node {}] converged after {} rounds", rank, round);
                    break;
                }
            }
            round += 1;
        }
        Ok(stats)
    }

    /// One pairing of the current phase: void/empty short-circuits, then the
    /// boundary probe, then (only if needed) the bulk exchange and merge.
    fn merge_exchange<C: Communicator>(
        &mut self,
        comm: &mut C,
        phase: Phase,
        local: &mut [f32],
        stats: &mut SortStats,
    ) -> Result<bool, EngineError> {
        let rank = comm.rank();
        let Some(peer) = phase.neighbor(rank, comm.nodes()) else {
            return Ok(false);
        };
        let n = local.len();
        let m = self.table.len_of(peer);
        if n == 0 || m == 0 {
            return Ok(false);
        }

        // One float decides whether the pair is already in relative order:
        // the lower node offers its maximum, the upper node its minimum.
        let mine = if rank < peer { local[n - 1] } else { local[0] };
        let mut probe = [0.0f32];
        comm.exchange(peer, &[mine], &mut probe)?;
        stats.probes += 1;
        let theirs = probe[0];
        let ordered = if rank < peer {
            mine <= theirs
        } else {
            mine >= theirs
        };
        if ordered {
            return Ok(false);
        }

        let incoming = &mut self.incoming[..m];
        comm.exchange(peer, local, incoming)?;
        stats.bulk_exchanges += 1;

        if rank < peer {
            merge_keep_low(local, incoming, &mut self.scratch);
            // The low side counts every real exchange as a change; only the
            // high side compares against the previous contents.
            Ok(true)
        } else {
            Ok(merge_keep_high(local, incoming, &mut self.scratch))
        }
    }
}
