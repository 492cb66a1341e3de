//! Diagnostic call-site attribution.
//!
//! Combinator descriptors record where they were assembled so that tooling
//! can attribute a chain to source code. The token is opaque to the
//! runtime: it is captured once and passed through unchanged, with no
//! behavioral effect.

use core::fmt;
use core::panic::Location;

/// The source location at which a combinator descriptor was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Captures the caller's source location.
    ///
    /// Meant to be called from a `#[track_caller]` constructor so the
    /// recorded location is the user's call site, not the constructor's.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Returns the source file of the call site.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the 1-based source line of the call site.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based source column of the call site.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn captured() -> CallSite {
        CallSite::here()
    }

    #[test]
    fn here_reports_the_callers_location() {
        let before = line!();
        let site = captured();
        assert_eq!(site.line(), before + 1);
        assert!(site.file().ends_with("callsite.rs"));
    }

    #[test]
    fn display_is_file_line_column() {
        let site = CallSite::here();
        let rendered = site.to_string();
        assert!(rendered.contains(site.file()));
        assert!(rendered.contains(&site.line().to_string()));
    }
}
