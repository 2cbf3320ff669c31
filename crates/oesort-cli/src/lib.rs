//! Library surface of the `oesort` binary: one module per subcommand.

pub mod check;
pub mod gen;
pub mod sort;
