use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const ENV_SOURCE_PATTERN: &str = "HIS_SOURCE_PATTERN";
pub const ENV_MAX_LOAD_FILES: &str = "HIS_MAX_LOAD_FILES";
pub const ENV_DEFAULT_COUNT: &str = "HIS_DEFAULT_COUNT";

const DEFAULT_SOURCE_PATTERN: &str = "~/works/00_memos/*月.md";
const DEFAULT_MAX_LOAD_FILES: usize = 2;
const DEFAULT_COUNT: usize = 1;

#[derive(Debug, Clone)]
pub struct Config {
    /// Glob matching the journal files (one file per month by convention).
    /// A leading `~` is already expanded to the home directory.
    pub source_pattern: String,
    /// How many of the most recent journal files are read.
    pub max_load_files: usize,
    /// How many days are shown when the command line does not say.
    pub default_count: usize,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    source_pattern: Option<String>,
    max_load_files: Option<usize>,
    default_count: Option<usize>,
}

impl Config {
    /// Public entrypoint: defaults, then the config file, then `HIS_*` environment variables.
    ///
    /// With `config_file` set, that file must exist. Otherwise the first existing file of
    /// [`Self::config_file_paths`] is used, and having none is fine.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let base = BaseDirs::new().context("Unable to determine the home directory")?;

        let file_config = match config_file {
            Some(path) => Self::read_file(path)?,
            None => Self::read_first_file(&Self::config_file_paths(&base))?,
        };

        let mut config = Self::from_file_config(file_config);
        config.apply_env(|key| std::env::var(key).ok())?;
        config.source_pattern = expand_home(&config.source_pattern, base.home_dir());
        Ok(config)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            source_pattern: file_config
                .source_pattern
                .unwrap_or_else(|| DEFAULT_SOURCE_PATTERN.to_string()),
            max_load_files: file_config
                .max_load_files
                .unwrap_or(DEFAULT_MAX_LOAD_FILES),
            default_count: file_config.default_count.unwrap_or(DEFAULT_COUNT),
        }
    }

    /// Overrides settings with the `HIS_*` variables returned by `lookup`.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(pattern) = lookup(ENV_SOURCE_PATTERN) {
            self.source_pattern = pattern;
        }
        if let Some(value) = lookup(ENV_MAX_LOAD_FILES) {
            self.max_load_files = parse_count(ENV_MAX_LOAD_FILES, &value)?;
        }
        if let Some(value) = lookup(ENV_DEFAULT_COUNT) {
            self.default_count = parse_count(ENV_DEFAULT_COUNT, &value)?;
        }
        Ok(())
    }

    /// Candidate config files, in priority order:
    /// - `~/.his.toml`
    /// - `~/.config/his/config.toml`
    /// - `{config_dir}/his/config.toml` (e.g. `~/Library/Application Support/his` on macOS)
    fn config_file_paths(base: &BaseDirs) -> Vec<PathBuf> {
        vec![
            base.home_dir().join(".his.toml"),
            base.home_dir().join(".config").join("his").join("config.toml"),
            base.config_dir().join("his").join("config.toml"),
        ]
    }

    fn read_first_file(paths: &[PathBuf]) -> Result<FileConfig> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::read_file(path),
            None => Ok(FileConfig::default()),
        }
    }

    fn read_file(path: &Path) -> Result<FileConfig> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a non-negative integer, found `{value}`"))
}

/// Replaces a leading `~` with `home`.
fn expand_home(pattern: &str, home: &Path) -> String {
    if pattern == "~" {
        return home.display().to_string();
    }
    match pattern.strip_prefix("~/") {
        Some(rest) => home.join(rest).display().to_string(),
        None => pattern.to_string(),
    }
}
