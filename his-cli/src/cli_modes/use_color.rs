use std::io::{self, IsTerminal};

use crate::render::ColorMode;

/// Colors are off by default when stdout is redirected (e.g with `>` or `|`) or `NO_COLOR` is set.
pub fn use_color(mode: ColorMode) -> bool {
    color_enabled(mode, no_color(), io::stdout().is_terminal())
}

/// Same rule for log output, which goes to stderr and may be redirected on its own.
pub fn use_color_on_stderr(mode: ColorMode) -> bool {
    color_enabled(mode, no_color(), io::stderr().is_terminal())
}

fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn color_enabled(mode: ColorMode, no_color: bool, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => !no_color && is_terminal,
    }
}
