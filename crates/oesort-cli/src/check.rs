//! The `check` subcommand: verify sortedness, optionally permutation-ness.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use sliceio::SliceFile;
use voracious_radix_sort::RadixSort;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Also verify the file is a permutation of this input
    #[arg(long)]
    pub against: Option<PathBuf>,

    /// File to verify
    pub path: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let file = SliceFile::open(&args.path)?;
    let count = file.element_count()?;
    let data = file.read_slice(0, count)?;

    for i in 1..data.len() {
        if data[i - 1] > data[i] {
            return Err(anyhow!(
                "{} is not sorted: element {} ({}) > element {} ({})",
                args.path.display(),
                i - 1,
                data[i - 1],
                i,
                data[i]
            ));
        }
    }

    if let Some(against) = &args.against {
        let source = SliceFile::open(against)?;
        let mut reference = source.read_slice(0, source.element_count()?)?;
        if reference.len() != data.len() {
            return Err(anyhow!(
                "{} holds {} elements, {} holds {}",
                against.display(),
                reference.len(),
                args.path.display(),
                data.len()
            ));
        }
        reference.voracious_sort();
        if reference != data {
            return Err(anyhow!(
                "{} is not a permutation of {}",
                args.path.display(),
                against.display()
            ));
        }
    }

    println!("{}: OK ({} elements)", args.path.display(), count);
    Ok(())
}
