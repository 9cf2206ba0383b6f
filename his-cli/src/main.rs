mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use cli::{Cli, Command};
use cli_modes::{files_mode, path_mode, summary_mode, tags_mode, use_color, use_color_on_stderr};
use his_core::{Config, GroupBy, History};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("his: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    logging::enable_logging(cli.verbose, use_color_on_stderr(cli.color))?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(files) = cli.files {
        config.max_load_files = files;
    }
    let history = History::with_config(config);
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: use_color(cli.color),
    }));

    let command = cli.command.unwrap_or(Command::Latest { args: Vec::new() });
    match command {
        Command::Latest { args } => summary_mode(&history, &renderer, GroupBy::Tag, &args),
        Command::Tag { args } => summary_mode(&history, &renderer, GroupBy::TagTitle, &args),
        Command::Tags => tags_mode(&history, &renderer),
        Command::Files => files_mode(&history, &renderer),
        Command::Path => path_mode(&history, &renderer),
    }
}
