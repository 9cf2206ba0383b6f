//! Turns the content of a journal file into closed `TimeLog` entries.
use super::time_log::TimeLog;
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

static ENTRY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- \d{8}").expect("entry line regex is valid"));

#[derive(Debug, Default)]
pub struct ParseResult {
    pub entries: Vec<TimeLog>,
    pub errors: Vec<String>,
}

/// Only lines starting with `- ` and an 8 digit date are looked at; everything else in the
/// file (headings, prose, other lists) is ignored.
pub fn is_entry_line(line: &str) -> bool {
    ENTRY_LINE.is_match(line)
}

/// Parses a single `- YYYYMMDD_HHMMSS [TAG [TITLE...]]` line.
///
/// The timestamp is read in the local timezone. The tag is the token after the timestamp and
/// the title is every remaining token joined by single spaces.
pub fn parse_line(line: &str) -> Result<TimeLog> {
    let mut tokens = line.split_whitespace().skip(1);
    let stamp = tokens.next().context("missing timestamp")?;
    let naive = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .with_context(|| format!("invalid timestamp `{stamp}`, expected YYYYMMDD_HHMMSS"))?;
    let start = earliest_instant(Local.from_local_datetime(&naive))
        .ok_or_else(|| anyhow!("timestamp `{stamp}` does not exist in the local timezone"))?;

    let tag = tokens.next().unwrap_or_default().to_string();
    let title = tokens.collect::<Vec<_>>().join(" ");
    Ok(TimeLog::new(start, tag, title))
}

/// Picks the instant a local wall-clock time stands for.
///
/// A repeated time (clocks going back) resolves to the earlier of the two instants, whatever
/// order the timezone reports them in. A skipped time (clocks going forward) has none.
pub fn earliest_instant<Tz: TimeZone>(
    result: LocalResult<DateTime<Tz>>,
) -> Option<DateTime<Tz>> {
    match result {
        LocalResult::Single(t) => Some(t),
        LocalResult::Ambiguous(a, b) => Some(a.min(b)),
        LocalResult::None => None,
    }
}

/// Parses every entry line of a file and closes each entry with the start of the next one.
///
/// Only valid entries are returned. The last entry of the file has no successor, so it is
/// never closed and never returned. Lines that fail to parse are reported in `errors` and do
/// not break the chain: the entry before them is closed by the next line that does parse.
pub fn parse_file_content(content: &str) -> ParseResult {
    let mut errors = Vec::new();

    let (mut entries, _last) = content
        .lines()
        .filter(|line| is_entry_line(line))
        .filter_map(|line| match parse_line(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("skipping line `{line}`: {e:#}");
                errors.push(format!("Invalid entry line `{line}`: {e:#}"));
                None
            }
        })
        .fold(
            (Vec::new(), None::<TimeLog>),
            |(mut closed, previous), current| {
                if let Some(mut previous) = previous {
                    previous.fix(&current);
                    closed.push(previous);
                }
                (closed, Some(current))
            },
        );

    entries.retain(TimeLog::is_valid);
    ParseResult { entries, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn parse_line_reads_tag_and_title() {
        let entry = parse_line("- 20220221_100000 COM hoge").unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2022, 2, 21).unwrap());
        assert_eq!(entry.tag, "COM");
        assert_eq!(entry.title, "hoge");
        assert_eq!(entry.end, None);
        assert_eq!(entry.duration, None);
    }

    #[test]
    fn parse_line_joins_title_words_with_single_spaces() {
        let entry = parse_line("- 20220221_100000 DEV fix   the  parser").unwrap();
        assert_eq!(entry.tag, "DEV");
        assert_eq!(entry.title, "fix the parser");
    }

    #[test]
    fn parse_line_without_tag_or_title() {
        let entry = parse_line("- 20220221_100000").unwrap();
        assert!(entry.tag.is_empty());
        assert!(entry.title.is_empty());
    }

    #[test]
    fn parse_line_rejects_bad_timestamp() {
        let err = parse_line("- 20221399_100000 COM hoge").unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
        assert!(parse_line("- 20220221 COM hoge").is_err());
    }

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn single_local_time_is_kept() {
        let t = offset(9).with_ymd_and_hms(2022, 2, 21, 10, 0, 0).unwrap();
        assert_eq!(earliest_instant(LocalResult::Single(t)), Some(t));
    }

    #[test]
    fn repeated_local_time_resolves_to_earlier_instant_in_either_order() {
        // 01:30 on the night New York falls back, once in EDT and once in EST.
        let edt = offset(-4).with_ymd_and_hms(2022, 11, 6, 1, 30, 0).unwrap();
        let est = offset(-5).with_ymd_and_hms(2022, 11, 6, 1, 30, 0).unwrap();
        assert!(edt < est);
        assert_eq!(earliest_instant(LocalResult::Ambiguous(est, edt)), Some(edt));
        assert_eq!(earliest_instant(LocalResult::Ambiguous(edt, est)), Some(edt));
    }

    #[test]
    fn skipped_local_time_has_no_instant() {
        assert_eq!(earliest_instant::<FixedOffset>(LocalResult::None), None);
    }

    #[test]
    fn entry_line_gate() {
        assert!(is_entry_line("- 20220221_100000 COM hoge"));
        assert!(is_entry_line("- 20220221"));
        assert!(!is_entry_line("# 2022-02-21"));
        assert!(!is_entry_line("  - 20220221_100000 COM"));
        assert!(!is_entry_line("- todo: buy milk"));
        assert!(!is_entry_line("-20220221_100000"));
    }

    #[test]
    fn parse_file_content_fixes_durations() {
        let content = "- 20220221_100000 COM hoge\n- 20220221_110000 COM fuga\n";
        let result = parse_file_content(content);
        assert!(result.errors.is_empty());
        assert_eq!(result.entries.len(), 1);
        let first = &result.entries[0];
        assert_eq!(first.tag, "COM");
        assert_eq!(first.title, "hoge");
        assert_eq!(first.seconds(), 3600);
    }

    #[test]
    fn each_duration_is_the_gap_to_the_next_entry() {
        let content = r#"# 2022-02-21

- 20220221_090000 MTG standup
- 20220221_091500 DEV review
some prose in between
- 20220221_103000 DEV coding
- 20220221_120000 LUNCH
"#;
        let result = parse_file_content(content);
        let seconds: Vec<i64> = result.entries.iter().map(TimeLog::seconds).collect();
        assert_eq!(seconds, vec![900, 4500, 5400]);
        assert!(result.entries.iter().all(|e| e.tag != "LUNCH"));
    }

    #[test]
    fn entry_without_tag_and_title_is_dropped() {
        let content = "- 20220221_100000\n- 20220221_110000 COM fuga\n- 20220221_120000 END\n";
        let result = parse_file_content(content);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].title, "fuga");
    }

    #[test]
    fn bad_line_is_reported_and_skipped() {
        let content = "- 20220221_100000 COM hoge
- 20229999_000000 BAD
- 20220221_103000 COM fuga
- 20220221_110000 END
";
        let result = parse_file_content(content);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("20229999_000000"));
        let seconds: Vec<i64> = result.entries.iter().map(TimeLog::seconds).collect();
        assert_eq!(seconds, vec![1800, 1800]);
    }

    #[test]
    fn file_with_a_single_entry_yields_nothing() {
        let result = parse_file_content("- 20220221_100000 COM hoge");
        assert!(result.entries.is_empty());
        assert!(result.errors.is_empty());
    }
}
