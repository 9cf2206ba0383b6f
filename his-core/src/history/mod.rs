mod file_selector;
mod history;

pub use file_selector::find_recent_files;
pub use history::{History, QueryError, QueryResult};
