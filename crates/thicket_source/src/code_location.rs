//! File-and-line locations identifying the call site of a framework call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The call site associated with a diagnostic.
///
/// A location is a plain comparable value. The absent location (empty file,
/// line 0) is the zero value returned by [`CodeLocation::absent`] and
/// [`Default`]; renderers omit it entirely.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct CodeLocation {
    /// Path of the source file, as reported by the compiler or the caller.
    pub file: String,
    /// The 1-indexed line number.
    pub line: u32,
}

impl CodeLocation {
    /// Creates a location for the given file and line.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Returns the absent location, used when no call site is available.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Captures the location of the caller.
    ///
    /// Because this is `#[track_caller]`, wrapping it in another
    /// `#[track_caller]` function reports that function's caller instead.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line())
    }

    /// Returns `true` if this is the absent location.
    pub fn is_absent(&self) -> bool {
        self.file.is_empty() && self.line == 0
    }
}

impl From<&std::panic::Location<'_>> for CodeLocation {
    fn from(loc: &std::panic::Location<'_>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent() {
            return Ok(());
        }
        write!(f, "{}:{}", self.file, self.line)
    }
}
