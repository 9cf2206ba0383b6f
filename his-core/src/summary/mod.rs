mod format_utils;
mod summary;

pub use format_utils::format_human_duration;
pub use summary::{GroupBy, Summary, SummaryGroup, TagTotal};
