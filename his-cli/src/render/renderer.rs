use his_core::{QueryError, SummaryGroup, TagTotal};
use std::io::{self, Write};
use std::path::Path;
use termimad::crossterm::style::{Color, Stylize};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub use_color: bool,
}

/// Prints results on stdout as tab separated lines, and notices and problems on stderr.
pub struct Renderer {
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    /// Notices such as "nothing found" never go to stdout, so piping the output stays clean.
    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{}", message.with(Color::DarkGrey));
        } else {
            eprintln!("{message}");
        }
    }

    pub fn print_line(&self, line: &str) {
        println!("{line}");
    }

    pub fn print_path(&self, path: &Path) {
        println!("{}", path.display());
    }

    /// `date<TAB>duration<TAB>tag[<TAB>title]`
    pub fn format_group(&self, group: &SummaryGroup) -> String {
        let mut date = group.date.format("%Y-%m-%d").to_string();
        let mut time = group.human_time();
        let mut tag = group.tag.clone();
        let mut title = group.title.clone();
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            time = time.with(Color::Blue).to_string();
            tag = tag.with(Color::Green).to_string();
            title = title.map(|t| t.with(Color::Yellow).to_string());
        }
        match title {
            Some(title) => format!("{date}\t{time}\t{tag}\t{title}"),
            None => format!("{date}\t{time}\t{tag}"),
        }
    }

    /// Prints the groups and returns how many were printed.
    pub fn print_groups<'a>(&self, groups: impl Iterator<Item = &'a SummaryGroup>) -> usize {
        let mut printed = 0;
        for group in groups {
            println!("{}", self.format_group(group));
            printed += 1;
        }
        printed
    }

    pub fn format_tag_total(&self, total: &TagTotal) -> String {
        let mut time = total.human_time();
        let mut tag = total.tag.clone();
        if self.opts.use_color {
            time = time.with(Color::Blue).to_string();
            tag = tag.with(Color::Green).to_string();
        }
        format!("{time}\t{tag}")
    }

    pub fn print_tag_totals(&self, totals: &[TagTotal]) {
        for total in totals {
            println!("{}", self.format_tag_total(total));
        }
    }

    pub fn print_errors(&self, errors: &[QueryError]) -> io::Result<()> {
        self.write_errors(&mut io::stderr().lock(), errors)
    }

    /// Writes the "Errors:" section, one line per problem. Nothing is written without errors.
    pub fn write_errors<W: Write>(&self, w: &mut W, errors: &[QueryError]) -> io::Result<()> {
        if errors.is_empty() {
            return Ok(());
        }
        if self.opts.use_color {
            writeln!(w, "\n{}", "Errors:".with(Color::Red).bold())?;
        } else {
            writeln!(w, "\nErrors:")?;
        }
        for error in errors {
            match error {
                QueryError::FileError { path, error } => {
                    writeln!(w, "* Could not read '{}': {}", path.display(), error)?
                }
                QueryError::InvalidLine { path, error } => {
                    writeln!(w, "* In '{}': {}", path.display(), error)?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::{Duration, NaiveDate};
    use std::path::PathBuf;

    fn plain() -> Renderer {
        Renderer::new(Some(RenderOptions { use_color: false }))
    }

    fn group(title: Option<&str>) -> SummaryGroup {
        SummaryGroup {
            date: NaiveDate::from_ymd_opt(2022, 2, 21).unwrap(),
            tag: "COM".to_string(),
            title: title.map(str::to_string),
            total: Duration::seconds(3600 + 125),
        }
    }

    #[test]
    fn tag_group_line() {
        assert_eq!(
            plain().format_group(&group(None)),
            "2022-02-21\t01h02m(+05s)\tCOM"
        );
    }

    #[test]
    fn tag_title_group_line() {
        assert_eq!(
            plain().format_group(&group(Some("fix the parser"))),
            "2022-02-21\t01h02m(+05s)\tCOM\tfix the parser"
        );
    }

    #[test]
    fn colored_line_keeps_tab_layout() {
        let colored = Renderer::new(None).format_group(&group(Some("hoge")));
        assert_eq!(colored.matches('\t').count(), 3);
        assert!(colored.contains("COM"));
    }

    #[test]
    fn tag_total_line() {
        let total = TagTotal {
            tag: "DEV".to_string(),
            total: Duration::minutes(90),
        };
        assert_eq!(plain().format_tag_total(&total), "01h30m(+00s)\tDEV");
    }

    fn errors() -> Vec<QueryError> {
        vec![
            QueryError::FileError {
                path: PathBuf::from("2022-03.md"),
                error: anyhow!("permission denied"),
            },
            QueryError::InvalidLine {
                path: PathBuf::from("2022-02.md"),
                error: "Invalid entry line `- 20229999_000000 BAD`".to_string(),
            },
        ]
    }

    /// A writer whose every write fails, like a closed stderr.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn errors_section_lists_each_problem() {
        let mut out = Vec::new();
        plain().write_errors(&mut out, &errors()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nErrors:\n\
             * Could not read '2022-03.md': permission denied\n\
             * In '2022-02.md': Invalid entry line `- 20229999_000000 BAD`\n"
        );
    }

    #[test]
    fn no_errors_writes_nothing() {
        let mut out = Vec::new();
        Renderer::new(None).write_errors(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn failed_error_write_is_returned_with_and_without_color() {
        for renderer in [plain(), Renderer::new(None)] {
            let err = renderer.write_errors(&mut ClosedPipe, &errors()).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        }
    }
}
