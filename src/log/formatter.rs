//! Pure rendering helpers shared by the console and file paths.

use std::fmt::{self, Display, Write as _};

use chrono::{DateTime, Local};

use crate::log::{call_site::CallSite, log_level::LogLevel};

pub const COLOR_END: &str = "\x1b[0m";

/// Default timestamp layout for every emitted line.
pub const DEFAULT_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Renders `"<tag> <file>:<line> <message>"`.
pub fn render(level: LogLevel, site: &CallSite, message: fmt::Arguments<'_>) -> String {
    let mut out = String::with_capacity(64);
    let _ = write!(
        out,
        "{} {}:{} {}",
        level.tag(),
        site.short_file(),
        site.line,
        message
    );
    out
}

/// Joins each argument's `Display` output with a single space.
pub fn join_args(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{arg}");
    }
    out
}

/// Builds the full output line (without trailing newline).
///
/// With `color`, the rendered text is wrapped in the level's ANSI sequence;
/// the timestamp is never colored.
pub fn line(
    timestamp: &DateTime<Local>,
    level: LogLevel,
    text: &str,
    color: bool,
    time_format: &str,
) -> String {
    let ts = timestamp.format(time_format);
    if color {
        format!("{ts} {}{text}{COLOR_END}", level.color_begin())
    } else {
        format!("{ts} {text}")
    }
}

/// Removes ANSI escape sequences, giving the line as it appears in a plain file.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    strip_ansi_escapes::strip_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 12, 0, 5)
            .earliest()
            .expect("valid local time")
    }

    #[test]
    fn render_layout() {
        let site = CallSite::new("src/app/server.rs", 42);
        let text = render(LogLevel::Error, &site, format_args!("disk {} full", "/var"));
        assert_eq!(text, "[E] server.rs:42 disk /var full");
    }

    #[test]
    fn render_unknown_site() {
        let text = render(LogLevel::Info, &CallSite::unknown(), format_args!("x"));
        assert_eq!(text, "[I] ???:0 x");
    }

    #[test]
    fn join_args_single_spaces() {
        let n = 7;
        assert_eq!(join_args(&[&n, &"abc", &1.5]), "7 abc 1.5");
        assert_eq!(join_args(&[]), "");
    }

    #[test]
    fn colored_line_strips_back_to_plain() {
        let ts = at_noon();
        let plain = line(&ts, LogLevel::Warning, "[W] a.rs:1 hi", false, DEFAULT_TIME_FORMAT);
        let colored = line(&ts, LogLevel::Warning, "[W] a.rs:1 hi", true, DEFAULT_TIME_FORMAT);
        assert_eq!(plain, "2024/03/09 12:00:05.000 [W] a.rs:1 hi");
        assert!(colored.contains("\x1b[33m"));
        assert!(colored.ends_with(COLOR_END));
        assert_eq!(strip_ansi(&colored), plain);
    }

    #[test]
    fn strip_ansi_keeps_other_text() {
        assert_eq!(strip_ansi("no codes"), "no codes");
        assert_eq!(strip_ansi("\x1b[1;35mX\x1b[0m y"), "X y");
    }
}
