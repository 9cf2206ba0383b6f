use chrono::{DateTime, Duration, Local, NaiveDate};

/// One timestamped activity line of a journal file, e.g. `- 20220221_100000 COM hoge`.
///
/// `end` and `duration` stay empty until the entry that follows it in the same file is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLog {
    /// Local date of `start`.
    pub date: NaiveDate,
    pub start: DateTime<Local>,
    pub end: Option<DateTime<Local>>,
    pub duration: Option<Duration>,
    pub tag: String,
    pub title: String,
}

impl TimeLog {
    pub fn new(start: DateTime<Local>, tag: String, title: String) -> Self {
        Self {
            date: start.date_naive(),
            start,
            end: None,
            duration: None,
            tag,
            title,
        }
    }

    /// Closes this entry at the start of the entry that follows it.
    pub fn fix(&mut self, next: &TimeLog) {
        self.end = Some(next.start);
        self.duration = Some(next.start - self.start);
    }

    /// An entry counts only once it has been closed with a non-zero duration and carries
    /// a tag or a title.
    pub fn is_valid(&self) -> bool {
        let closed = self.end.is_some() && self.duration.is_some_and(|d| !d.is_zero());
        closed && !(self.tag.is_empty() && self.title.is_empty())
    }

    pub fn seconds(&self) -> i64 {
        self.duration.map(|d| d.num_seconds()).unwrap_or(0)
    }
}
