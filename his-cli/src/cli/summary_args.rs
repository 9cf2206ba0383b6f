/// What `his latest` and `his tag` should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryArgs {
    pub tag: Option<String>,
    /// Number of distinct days to print.
    pub count: usize,
}

/// Reads free positional arguments in any order: a number is the day count, anything else is
/// the tag. When a kind is given twice the last one wins.
pub fn parse_summary_args(args: &[String], default_count: usize) -> SummaryArgs {
    args.iter().fold(
        SummaryArgs {
            tag: None,
            count: default_count,
        },
        |mut parsed, arg| {
            match arg.parse::<usize>() {
                Ok(count) => parsed.count = count,
                Err(_) => parsed.tag = Some(arg.clone()),
            }
            parsed
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_uses_default_count() {
        assert_eq!(
            parse_summary_args(&[], 1),
            SummaryArgs {
                tag: None,
                count: 1
            }
        );
    }

    #[test]
    fn tag_and_count_in_either_order() {
        let expected = SummaryArgs {
            tag: Some("COM".to_string()),
            count: 3,
        };
        assert_eq!(parse_summary_args(&args(&["COM", "3"]), 1), expected);
        assert_eq!(parse_summary_args(&args(&["3", "COM"]), 1), expected);
    }

    #[test]
    fn last_value_of_each_kind_wins() {
        let parsed = parse_summary_args(&args(&["2", "DEV", "COM", "5"]), 1);
        assert_eq!(parsed.tag.as_deref(), Some("COM"));
        assert_eq!(parsed.count, 5);
    }

    #[test]
    fn count_only() {
        let parsed = parse_summary_args(&args(&["7"]), 1);
        assert_eq!(parsed.tag, None);
        assert_eq!(parsed.count, 7);
    }
}
