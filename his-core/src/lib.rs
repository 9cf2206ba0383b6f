pub mod config;
pub mod history;
pub mod summary;
pub mod time_log;

pub use config::Config;
pub use history::{History, QueryError, QueryResult};
pub use summary::{GroupBy, Summary, SummaryGroup, TagTotal, format_human_duration};
pub use time_log::TimeLog;
