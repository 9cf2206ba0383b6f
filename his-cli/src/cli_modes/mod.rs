mod list_mode;
mod summary_mode;
mod use_color;

pub use list_mode::{files_mode, path_mode, tags_mode};
pub use summary_mode::summary_mode;
pub use use_color::{use_color, use_color_on_stderr};
