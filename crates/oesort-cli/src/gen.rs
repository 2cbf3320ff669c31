//! The `gen` subcommand: seeded pseudo-random input files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sliceio::SliceFile;

/// Arguments for the `gen` subcommand.
#[derive(Args, Debug)]
pub struct GenArgs {
    /// Number of elements to generate
    #[arg(long)]
    pub count: usize,

    /// Seed for the generator; the same seed reproduces the same file
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Destination file
    pub path: PathBuf,
}

/// Elements written per positioned write.
const CHUNK: usize = 1 << 16;

pub fn run(args: GenArgs) -> Result<()> {
    let file = SliceFile::create(&args.path, args.count)
        .with_context(|| format!("creating {}", args.path.display()))?;

    let mut rng = fastrand::Rng::with_seed(args.seed);
    let mut chunk = Vec::with_capacity(CHUNK.min(args.count.max(1)));
    let mut written = 0;
    while written < args.count {
        let take = CHUNK.min(args.count - written);
        chunk.clear();
        chunk.extend((0..take).map(|_| rng.f32() * 2000.0 - 1000.0));
        file.write_slice(written, &chunk)?;
        written += take;
    }

    log::info!(
        "[gen] wrote {} elements (seed {}) to {}",
        args.count,
        args.seed,
        args.path.display()
    );
    Ok(())
}
