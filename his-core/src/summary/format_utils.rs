/// Returns an output like this: `01h05m(+30s)`.
///
/// Hours are not wrapped, so a week of work reads `168h00m(+00s)`.
pub fn format_human_duration(seconds: i64) -> String {
    format!(
        "{:02}h{:02}m(+{:02}s)",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}
