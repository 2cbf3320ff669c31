//! Odd/even neighbor pairing of the transposition network.

/// The two alternating pairing patterns. A round runs `Odd` then `Even`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Even ranks pair upward: (0,1), (2,3), ...
    Odd,
    /// Even ranks pair downward: (1,2), (3,4), ...
    Even,
}

impl Phase {
    /// Neighbor of `rank` in this phase, or `None` for a void pairing at
    /// either end of the rank line.
    pub fn neighbor(self, rank: usize, nodes: usize) -> Option<usize> {
        let upward = match self {
            Phase::Odd => rank % 2 == 0,
            Phase::Even => rank % 2 != 0,
        };
        let peer = if upward { rank + 1 } else { rank.checked_sub(1)? };
        (peer < nodes).then_some(peer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_phase_pairs_even_ranks_upward() {
        assert_eq!(Phase::Odd.neighbor(0, 4), Some(1));
        assert_eq!(Phase::Odd.neighbor(1, 4), Some(0));
        assert_eq!(Phase::Odd.neighbor(2, 4), Some(3));
        assert_eq!(Phase::Odd.neighbor(3, 4), Some(2));
    }

    #[test]
    fn even_phase_pairs_even_ranks_downward() {
        assert_eq!(Phase::Even.neighbor(0, 4), None);
        assert_eq!(Phase::Even.neighbor(1, 4), Some(2));
        assert_eq!(Phase::Even.neighbor(2, 4), Some(1));
        assert_eq!(Phase::Even.neighbor(3, 4), None);
    }

    #[test]
    fn edge_ranks_get_void_pairings() {
        // Odd node count: the last rank is unpaired in one phase per parity.
        assert_eq!(Phase::Odd.neighbor(4, 5), None);
        assert_eq!(Phase::Even.neighbor(4, 5), Some(3));
        // Single node never pairs.
        assert_eq!(Phase::Odd.neighbor(0, 1), None);
        assert_eq!(Phase::Even.neighbor(0, 1), None);
    }

    #[test]
    fn pairings_are_symmetric() {
        for nodes in [2, 5, 8] {
            for phase in [Phase::Odd, Phase::Even] {
                for rank in 0..nodes {
                    if let Some(peer) = phase.neighbor(rank, nodes) {
                        assert_eq!(phase.neighbor(peer, nodes), Some(rank));
                    }
                }
            }
        }
    }
}
