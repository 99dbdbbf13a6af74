//! The lifecycle phase a catalog scenario belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The phase of a suite's lifecycle in which a class of misuse is detected.
///
/// Categories group the [`catalog`](crate::catalog) for documentation and
/// listing. They are not stored on a [`Diagnostic`](crate::Diagnostic) and
/// carry no severity; whether a failure aborts the run is up to the caller.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Malformed tree construction.
    TreeConstruction,
    /// Invalid node decoration or body.
    Decoration,
    /// Misuse of report entries.
    ReportEntry,
    /// Failures coordinating parallel processes.
    ParallelSync,
    /// Conflicting or invalid run configuration.
    Configuration,
    /// Failures of the overall run lifecycle.
    Lifecycle,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 6] = [
        Category::TreeConstruction,
        Category::Decoration,
        Category::ReportEntry,
        Category::ParallelSync,
        Category::Configuration,
        Category::Lifecycle,
    ];

    /// Returns a short human-readable title for this category.
    pub fn title(self) -> &'static str {
        match self {
            Category::TreeConstruction => "Tree construction",
            Category::Decoration => "Decoration",
            Category::ReportEntry => "Report entries",
            Category::ParallelSync => "Parallel synchronization",
            Category::Configuration => "Configuration",
            Category::Lifecycle => "Lifecycle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
