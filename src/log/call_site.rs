use std::panic::Location;

/// Rendered when the caller's location cannot be resolved.
pub const UNKNOWN_FILE: &str = "???";

/// Source location a log call originated from.
///
/// Captured at the macro boundary (`file!()` / `line!()`) or through
/// `#[track_caller]`, so wrapping layers never have to count stack frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let loc = Location::caller();
        Self::new(loc.file(), loc.line())
    }

    #[must_use]
    pub const fn unknown() -> Self {
        Self::new(UNKNOWN_FILE, 0)
    }

    /// File name without its directories, e.g. `src/net/conn.rs` -> `conn.rs`.
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        let file = self.file;
        if file.is_empty() {
            return UNKNOWN_FILE;
        }
        file.rsplit(['/', '\\']).next().unwrap_or(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn wrapped() -> CallSite {
        CallSite::caller()
    }

    #[test]
    fn track_caller_sees_through_wrappers() {
        let expected_line = line!() + 1;
        let site = wrapped();
        assert_eq!(site.line, expected_line);
        assert_eq!(site.short_file(), "call_site.rs");
    }

    #[test]
    fn short_file_handles_both_separators() {
        assert_eq!(CallSite::new("a/b/c.rs", 1).short_file(), "c.rs");
        assert_eq!(CallSite::new("a\\b\\d.rs", 1).short_file(), "d.rs");
        assert_eq!(CallSite::new("plain.rs", 1).short_file(), "plain.rs");
        assert_eq!(CallSite::new("", 1).short_file(), UNKNOWN_FILE);
    }
}
