//! Partition sizing across sort nodes.

/// Contiguous element range owned by one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Element offset of the first owned element.
    pub start: usize,
    /// Number of owned elements. May be zero when there are fewer elements
    /// than nodes.
    pub len: usize,
}

/// Per-rank partition lengths, identical on every node.
///
/// Built once from the total element count and the node count; never mutated
/// afterwards. Lengths are monotonically non-increasing by rank and differ
/// by at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    lens: Vec<usize>,
    total: usize,
}

impl RankTable {
    /// Split `total` elements across `nodes` ranks. The first `total % nodes`
    /// ranks take one extra element.
    pub fn new(total: usize, nodes: usize) -> Self {
        assert!(nodes > 0, "at least one node required");
        let base = total / nodes;
        let rem = total % nodes;
        let lens = (0..nodes)
            .map(|r| if r < rem { base + 1 } else { base })
            .collect();
        Self { lens, total }
    }

    pub fn nodes(&self) -> usize {
        self.lens.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len_of(&self, rank: usize) -> usize {
        self.lens[rank]
    }

    /// Element offset of `rank`'s partition: the sum of all lower ranks'
    /// lengths, computed in closed form.
    pub fn start_of(&self, rank: usize) -> usize {
        let base = self.total / self.nodes();
        let rem = self.total % self.nodes();
        if rank < rem {
            rank * (base + 1)
        } else {
            rem * (base + 1) + (rank - rem) * base
        }
    }

    pub fn partition(&self, rank: usize) -> Partition {
        Partition {
            start: self.start_of(rank),
            len: self.len_of(rank),
        }
    }

    /// Largest partition length. Scratch buffers are sized to this once and
    /// reused for every exchange.
    pub fn max_len(&self) -> usize {
        self.lens.first().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_cover_the_input_exactly() {
        for total in [0, 1, 7, 8, 100, 1001] {
            for nodes in [1, 2, 3, 7, 16] {
                let table = RankTable::new(total, nodes);
                let sum: usize = (0..nodes).map(|r| table.len_of(r)).sum();
                assert_eq!(sum, total, "total = {}, nodes = {}", total, nodes);
            }
        }
    }

    #[test]
    fn lengths_differ_by_at_most_one_and_never_grow() {
        for total in [0, 5, 64, 999] {
            for nodes in [1, 4, 10] {
                let table = RankTable::new(total, nodes);
                for r in 1..nodes {
                    assert!(table.len_of(r) <= table.len_of(r - 1));
                    assert!(table.len_of(0) - table.len_of(r) <= 1);
                }
                assert_eq!(table.max_len(), table.len_of(0));
            }
        }
    }

    #[test]
    fn starts_are_prefix_sums_of_lengths() {
        for total in [0, 3, 17, 256] {
            for nodes in [1, 5, 8] {
                let table = RankTable::new(total, nodes);
                let mut expected = 0;
                for r in 0..nodes {
                    assert_eq!(table.start_of(r), expected);
                    expected += table.len_of(r);
                }
                assert_eq!(expected, total);
            }
        }
    }

    #[test]
    fn fewer_elements_than_nodes_leaves_trailing_ranks_empty() {
        let table = RankTable::new(3, 5);
        assert_eq!(
            (0..5).map(|r| table.len_of(r)).collect::<Vec<_>>(),
            vec![1, 1, 1, 0, 0]
        );
        assert_eq!(table.partition(4), Partition { start: 3, len: 0 });
    }

    #[test]
    #[should_panic(expected = "at least one node")]
    fn zero_nodes_is_rejected() {
        RankTable::new(10, 0);
    }
}
