//! The `sort` subcommand: one scoped thread per node, wired over the
//! in-process channel mesh.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use comm::{ChannelMesh, ReduceStrategy, ThreadComm};
use engine::{OddEvenSorter, RankTable, SortStats};
use sliceio::SliceFile;

/// Arguments for the `sort` subcommand.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Total number of elements to sort
    #[arg(long)]
    pub count: usize,

    /// Number of sort nodes (defaults to the available CPU parallelism)
    #[arg(long, env = "OESORT_NODES")]
    pub nodes: Option<usize>,

    /// Aggregation strategy for the convergence reduction
    #[arg(long, value_enum, default_value = "flat")]
    pub reduce: Reduce,

    /// Input file of dense native-endian f32 values
    pub input: PathBuf,

    /// Output file; receives the sorted sequence with identical layout
    pub output: PathBuf,
}

/// CLI-facing mirror of [`ReduceStrategy`].
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Reduce {
    Flat,
    Tree,
}

impl From<Reduce> for ReduceStrategy {
    fn from(r: Reduce) -> Self {
        match r {
            Reduce::Flat => ReduceStrategy::Flat,
            Reduce::Tree => ReduceStrategy::Tree,
        }
    }
}

pub fn run(args: SortArgs) -> Result<()> {
    let nodes = match args.nodes {
        Some(0) => return Err(anyhow!("--nodes must be at least 1")),
        Some(n) => n,
        None => thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1),
    };

    let input = SliceFile::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let have = input.element_count()?;
    if have < args.count {
        return Err(anyhow!(
            "input holds {} elements, --count asked for {}",
            have,
            args.count
        ));
    }

    SliceFile::create(&args.output, args.count)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let table = RankTable::new(args.count, nodes);
    let comms = ChannelMesh::connect_with(nodes, args.reduce.into());
    let stats = run_nodes(&table, comms, &args.input, &args.output)?;

    let bulk: usize = stats.iter().map(|s| s.bulk_exchanges).sum();
    let probes: usize = stats.iter().map(|s| s.probes).sum();
    log::info!(
        "[sort] {} elements over {} nodes: {} rounds, {} probes, {} bulk exchanges",
        args.count,
        nodes,
        stats[0].rounds,
        probes,
        bulk
    );
    Ok(())
}

/// Drive every node to completion, propagating the first failure.
fn run_nodes(
    table: &RankTable,
    comms: Vec<ThreadComm>,
    input: &Path,
    output: &Path,
) -> Result<Vec<SortStats>> {
    thread::scope(|s| {
        let handles: Vec<_> = comms
            .into_iter()
            .enumerate()
            .map(|(rank, mut comm)| {
                s.spawn(move || node_main(rank, &mut comm, table, input, output))
            })
            .collect();

        let mut stats = Vec::with_capacity(handles.len());
        for (rank, handle) in handles.into_iter().enumerate() {
            let node_stats = handle
                .join()
                .map_err(|_| anyhow!("node {} panicked", rank))?
                .with_context(|| format!("node {} failed", rank))?;
            stats.push(node_stats);
        }
        Ok(stats)
    })
}

/// One node's life: read the partition, run the engine, write it back.
fn node_main(
    rank: usize,
    comm: &mut ThreadComm,
    table: &RankTable,
    input: &Path,
    output: &Path,
) -> Result<SortStats> {
    let part = table.partition(rank);
    let mut local = SliceFile::open(input)?
        .read_slice(part.start, part.len)
        .with_context(|| format!("reading {} elements at offset {}", part.len, part.start))?;

    let mut sorter = OddEvenSorter::new(table.clone());
    let stats = sorter.run(comm, &mut local)?;

    SliceFile::open_rw(output)?
        .write_slice(part.start, &local)
        .with_context(|| format!("writing {} elements at offset {}", local.len(), part.start))?;
    Ok(stats)
}
