//! The `History` struct, the entry point used by the CLI.
use super::file_selector::find_recent_files;
use crate::config::Config;
use crate::summary::{GroupBy, Summary, TagTotal};
use crate::time_log::{TimeLog, parse_file_content};
use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the time logs of the configured journal files.
#[derive(Debug)]
pub struct History {
    pub config: Config,
}

/// Represents a non-critical issue that occurred while reading the journal.
///
/// These never stop a query: the offending line or file is skipped.
#[derive(Debug)]
pub enum QueryError {
    InvalidLine { path: PathBuf, error: String },
    FileError { path: PathBuf, error: anyhow::Error },
}

/// Valid entries of the selected files, newest first, plus what had to be skipped.
#[derive(Debug, Default)]
pub struct QueryResult {
    /// Files that were selected, newest first.
    pub files: Vec<PathBuf>,
    pub entries: Vec<TimeLog>,
    pub errors: Vec<QueryError>,
}

impl History {
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The `max_load_files` most recent journal files, newest first.
    pub fn find_recent_files(&self) -> Result<Vec<PathBuf>> {
        find_recent_files(&self.config.source_pattern, self.config.max_load_files)
    }

    /// Reads the most recent journal files and pools their valid entries.
    ///
    /// Entries are chained per file only, then sorted by date and start time, both descending.
    /// Fails only when the source pattern itself is invalid.
    pub fn read_recent(&self) -> Result<QueryResult> {
        let files = self.find_recent_files()?;
        let mut entries = Vec::new();
        let mut errors = Vec::new();

        for path in &files {
            let result = self.parse_file(path);
            entries.extend(result.entries);
            errors.extend(result.errors);
        }

        entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.start.cmp(&a.start))
        });
        debug!(
            "read {} entries from {} file(s), {} problem(s)",
            entries.len(),
            files.len(),
            errors.len()
        );

        Ok(QueryResult {
            files,
            entries,
            errors,
        })
    }

    /// Parses a single journal file.
    ///
    /// A file that cannot be read is reported as a [`QueryError::FileError`] with no entries.
    pub fn parse_file(&self, path: &Path) -> QueryResult {
        let mut entries = Vec::new();
        let mut errors = Vec::new();
        match fs::read_to_string(path) {
            Ok(content) => {
                let parse_result = parse_file_content(&content);
                entries = parse_result.entries;
                for error in parse_result.errors {
                    errors.push(QueryError::InvalidLine {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
            Err(error) => {
                debug!("skipping {}: {error}", path.display());
                errors.push(QueryError::FileError {
                    path: path.to_path_buf(),
                    error: anyhow!(error),
                });
            }
        }
        QueryResult {
            files: vec![path.to_path_buf()],
            entries,
            errors,
        }
    }

    pub fn summarize(&self, result: &QueryResult, group_by: GroupBy) -> Summary {
        Summary::from_entries(&result.entries, group_by)
    }

    pub fn all_tags(&self, result: &QueryResult) -> Vec<TagTotal> {
        TagTotal::from_entries(&result.entries)
    }
}
