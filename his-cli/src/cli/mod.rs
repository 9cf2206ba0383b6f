mod cli;
mod summary_args;

pub use cli::{Cli, Command};
pub use summary_args::parse_summary_args;
