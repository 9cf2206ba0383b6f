use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::render::ColorMode;

/// his — time summaries from a markdown activity journal
#[derive(Parser, Debug)]
#[command(name = "his", version, about)]
pub struct Cli {
    /// Config file to use instead of `~/.his.toml` or `~/.config/his/config.toml`.
    #[arg(long, global = true, env = "HIS_CONFIG")]
    pub config: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// How many of the most recent journal files to read (overrides `max_load_files`).
    #[arg(long, global = true)]
    pub files: Option<usize>,
    /// More log output on stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Without a command, `his` behaves like `his latest`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Time per tag for the most recent days (e.g. `his latest 3`, `his latest COM 2`)
    #[clap(alias("l"))]
    Latest {
        /// A number of days and/or a tag, in any order
        #[arg(value_name = "TAG|DAYS")]
        args: Vec<String>,
    },
    /// Time per tag and title for the most recent days (e.g. `his tag COM`, `his tag 2 DEV`)
    #[clap(alias("t"))]
    Tag {
        /// A number of days and/or a tag, in any order
        #[arg(value_name = "TAG|DAYS")]
        args: Vec<String>,
    },
    /// Every tag of the loaded files with its total time
    Tags,
    /// Prints the journal files that would be read, newest first
    Files,
    /// Prints the resolved journal file pattern
    Path,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
