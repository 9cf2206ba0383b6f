//! Groups closed time logs into per-day totals.
use super::format_utils::format_human_duration;
use crate::time_log::TimeLog;
use chrono::{Duration, NaiveDate};

/// Which fields make up the key of a summary group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    /// `(date, tag)`
    #[default]
    Tag,
    /// `(date, tag, title)`
    TagTitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryGroup {
    pub date: NaiveDate,
    pub tag: String,
    /// Only set when grouping by [`GroupBy::TagTitle`].
    pub title: Option<String>,
    pub total: Duration,
}

impl SummaryGroup {
    fn from_entry(entry: &TimeLog, group_by: GroupBy) -> Self {
        Self {
            date: entry.date,
            tag: entry.tag.clone(),
            title: match group_by {
                GroupBy::Tag => None,
                GroupBy::TagTitle => Some(entry.title.clone()),
            },
            total: Duration::zero(),
        }
    }

    fn matches(&self, entry: &TimeLog) -> bool {
        let same_title = match &self.title {
            Some(title) => *title == entry.title,
            None => true,
        };
        self.date == entry.date && self.tag == entry.tag && same_title
    }

    pub fn seconds(&self) -> i64 {
        self.total.num_seconds()
    }

    pub fn human_time(&self) -> String {
        format_human_duration(self.seconds())
    }
}

/// Summed groups in the order their first entry was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub groups: Vec<SummaryGroup>,
}

impl Summary {
    /// Builds the groups for `entries`, which are expected to be sorted already
    /// (see [`crate::History::read_recent`]). Invalid entries are skipped.
    ///
    /// Lookups are a linear scan over the groups built so far, which keeps first-seen order
    /// without a second index. Input is a few hundred entries at most.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = &'a TimeLog>,
        group_by: GroupBy,
    ) -> Self {
        let mut groups: Vec<SummaryGroup> = Vec::new();
        for entry in entries.into_iter().filter(|e| e.is_valid()) {
            let duration = entry.duration.unwrap_or_else(Duration::zero);
            match groups.iter_mut().find(|group| group.matches(entry)) {
                Some(group) => group.total += duration,
                None => {
                    let mut group = SummaryGroup::from_entry(entry, group_by);
                    group.total = duration;
                    groups.push(group);
                }
            }
        }
        Self { groups }
    }

    /// Walks the groups in order and stops as soon as more than `max_dates` distinct dates have
    /// been seen. When `tag` is given, only groups with exactly that tag are yielded.
    ///
    /// Dates are counted before the tag filter, so `max_dates` always means "the most recent
    /// days of the journal" whether or not the tag shows up on each of them.
    pub fn select<'a>(
        &'a self,
        tag: Option<&'a str>,
        max_dates: usize,
    ) -> impl Iterator<Item = &'a SummaryGroup> + 'a {
        let mut seen_dates = 0usize;
        let mut current: Option<NaiveDate> = None;
        self.groups
            .iter()
            .take_while(move |group| {
                if current != Some(group.date) {
                    seen_dates += 1;
                    current = Some(group.date);
                }
                seen_dates <= max_dates
            })
            .filter(move |group| match tag {
                Some(tag) => group.tag == tag,
                None => true,
            })
    }
}

/// Total time of one tag over every loaded day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTotal {
    pub tag: String,
    pub total: Duration,
}

impl TagTotal {
    pub fn human_time(&self) -> String {
        format_human_duration(self.total.num_seconds())
    }

    /// Distinct non-empty tags of `entries` with their summed durations, first-seen order.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a TimeLog>) -> Vec<Self> {
        let mut totals: Vec<TagTotal> = Vec::new();
        for entry in entries
            .into_iter()
            .filter(|e| e.is_valid() && !e.tag.is_empty())
        {
            let duration = entry.duration.unwrap_or_else(Duration::zero);
            match totals.iter_mut().find(|t| t.tag == entry.tag) {
                Some(total) => total.total += duration,
                None => totals.push(TagTotal {
                    tag: entry.tag.clone(),
                    total: duration,
                }),
            }
        }
        totals
    }
}
