use crate::render::Renderer;
use anyhow::Result;
use his_core::History;

pub fn tags_mode(history: &History, renderer: &Renderer) -> Result<()> {
    let result = history.read_recent()?;
    let tags = history.all_tags(&result);
    if tags.is_empty() {
        renderer.print_info("No tags found");
    } else {
        renderer.print_tag_totals(&tags);
    }
    renderer.print_errors(&result.errors)?;
    Ok(())
}

pub fn files_mode(history: &History, renderer: &Renderer) -> Result<()> {
    let files = history.find_recent_files()?;
    if files.is_empty() {
        renderer.print_info(&format!(
            "No journal files match {}",
            history.config.source_pattern
        ));
    }
    for path in &files {
        renderer.print_path(path);
    }
    Ok(())
}

pub fn path_mode(history: &History, renderer: &Renderer) -> Result<()> {
    renderer.print_line(&history.config.source_pattern);
    Ok(())
}
