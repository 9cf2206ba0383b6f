mod parse_time_logs;
mod time_log;

pub use parse_time_logs::{
    ParseResult, earliest_instant, is_entry_line, parse_file_content, parse_line,
};
pub use time_log::TimeLog;
