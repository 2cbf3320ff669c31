use clap::{Parser, Subcommand};

/// oesort command-line interface
#[derive(Parser)]
#[command(
    name = "oesort",
    version,
    about = "Distributed odd-even transposition sort for dense float files"
)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Supported subcommands
#[derive(Subcommand)]
enum Command {
    /// Sort a float file across cooperating nodes
    Sort(oesort_cli::sort::SortArgs),
    /// Generate a seeded pseudo-random input file
    Gen(oesort_cli::gen::GenArgs),
    /// Verify that a float file is sorted
    Check(oesort_cli::check::CheckArgs),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Sort(args) => oesort_cli::sort::run(args),
        Command::Gen(args) => oesort_cli::gen::run(args),
        Command::Check(args) => oesort_cli::check::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
