use crate::{cli::parse_summary_args, render::Renderer};
use anyhow::Result;
use his_core::{GroupBy, History};
use tracing::debug;

/// `his latest` (per tag) and `his tag` (per tag and title).
pub fn summary_mode(
    history: &History,
    renderer: &Renderer,
    group_by: GroupBy,
    args: &[String],
) -> Result<()> {
    let request = parse_summary_args(args, history.config.default_count);
    debug!("summary by {group_by:?}, {request:?}");

    let result = history.read_recent()?;
    if result.files.is_empty() {
        renderer.print_info(&format!(
            "No journal files match {}",
            history.config.source_pattern
        ));
        return Ok(());
    }

    let summary = history.summarize(&result, group_by);
    let printed = renderer.print_groups(summary.select(request.tag.as_deref(), request.count));
    if printed == 0 {
        match &request.tag {
            Some(tag) => renderer.print_info(&format!("No entries found for {tag}")),
            None => renderer.print_info("No entries found"),
        }
    }

    renderer.print_errors(&result.errors)?;
    Ok(())
}
