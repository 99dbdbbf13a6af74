//! Classification of test-tree nodes and the groupings used to reason about them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// The kind of a node registered in the test tree.
///
/// Kinds fall into three broad families: containers that group other nodes,
/// leaf-level nodes that run inside a spec (the spec itself and its setup
/// and teardown hooks), and suite-level nodes that may appear only once, at
/// the top level of the suite.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum NodeKind {
    /// A container introduced with `describe`.
    Describe,
    /// A container introduced with `context`.
    Context,
    /// A container introduced with `when`.
    When,
    /// A spec introduced with `it`.
    It,
    /// A spec introduced with `specify`.
    Specify,
    /// Runs before every spec in its container.
    BeforeEach,
    /// Runs before every spec, after all `BeforeEach` nodes.
    JustBeforeEach,
    /// Runs after every spec in its container.
    AfterEach,
    /// Runs after every spec, before any `AfterEach` nodes.
    JustAfterEach,
    /// Runs once before the first spec of an ordered container.
    BeforeAll,
    /// Runs once after the last spec of an ordered container.
    AfterAll,
    /// Suite-wide setup.
    BeforeSuite,
    /// Suite-wide setup that runs first on process #1 and then on every process.
    SynchronizedBeforeSuite,
    /// Suite-wide teardown.
    AfterSuite,
    /// Suite-wide teardown that runs on every process and then last on process #1.
    SynchronizedAfterSuite,
    /// Reporting hook invoked after every spec.
    ReportAfterEach,
    /// Reporting hook invoked once with the aggregated suite report.
    ReportAfterSuite,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [NodeKind; 17] = [
        NodeKind::Describe,
        NodeKind::Context,
        NodeKind::When,
        NodeKind::It,
        NodeKind::Specify,
        NodeKind::BeforeEach,
        NodeKind::JustBeforeEach,
        NodeKind::AfterEach,
        NodeKind::JustAfterEach,
        NodeKind::BeforeAll,
        NodeKind::AfterAll,
        NodeKind::BeforeSuite,
        NodeKind::SynchronizedBeforeSuite,
        NodeKind::AfterSuite,
        NodeKind::SynchronizedAfterSuite,
        NodeKind::ReportAfterEach,
        NodeKind::ReportAfterSuite,
    ];

    /// Returns the single-kind set containing only this kind.
    pub const fn as_set(self) -> NodeKindSet {
        NodeKindSet(1 << self as u32)
    }

    /// Returns `true` if this kind is a member of `set`.
    pub fn is(self, set: NodeKindSet) -> bool {
        set.contains(self)
    }

    /// Returns the name used for this kind in user-facing text.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Describe => "Describe",
            NodeKind::Context => "Context",
            NodeKind::When => "When",
            NodeKind::It => "It",
            NodeKind::Specify => "Specify",
            NodeKind::BeforeEach => "BeforeEach",
            NodeKind::JustBeforeEach => "JustBeforeEach",
            NodeKind::AfterEach => "AfterEach",
            NodeKind::JustAfterEach => "JustAfterEach",
            NodeKind::BeforeAll => "BeforeAll",
            NodeKind::AfterAll => "AfterAll",
            NodeKind::BeforeSuite => "BeforeSuite",
            NodeKind::SynchronizedBeforeSuite => "SynchronizedBeforeSuite",
            NodeKind::AfterSuite => "AfterSuite",
            NodeKind::SynchronizedAfterSuite => "SynchronizedAfterSuite",
            NodeKind::ReportAfterEach => "ReportAfterEach",
            NodeKind::ReportAfterSuite => "ReportAfterSuite",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`NodeKind`]s, stored as a bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct NodeKindSet(u32);

impl NodeKindSet {
    /// The empty set.
    pub const EMPTY: NodeKindSet = NodeKindSet(0);

    /// Containers: `Describe`, `Context`, `When`.
    pub const CONTAINERS: NodeKindSet = NodeKind::Describe
        .as_set()
        .union(NodeKind::Context.as_set())
        .union(NodeKind::When.as_set());

    /// Specs: `It`, `Specify`.
    pub const LEAVES: NodeKindSet = NodeKind::It.as_set().union(NodeKind::Specify.as_set());

    /// Per-spec and per-container setup and teardown hooks.
    pub const SETUP: NodeKindSet = NodeKind::BeforeEach
        .as_set()
        .union(NodeKind::JustBeforeEach.as_set())
        .union(NodeKind::AfterEach.as_set())
        .union(NodeKind::JustAfterEach.as_set())
        .union(NodeKind::BeforeAll.as_set())
        .union(NodeKind::AfterAll.as_set());

    /// Suite-level setup nodes; at most one may be declared.
    pub const SUITE_SETUP: NodeKindSet = NodeKind::BeforeSuite
        .as_set()
        .union(NodeKind::SynchronizedBeforeSuite.as_set());

    /// Suite-level teardown nodes; at most one may be declared.
    pub const SUITE_TEARDOWN: NodeKindSet = NodeKind::AfterSuite
        .as_set()
        .union(NodeKind::SynchronizedAfterSuite.as_set());

    /// The suite-completion reporter.
    pub const REPORT_AFTER_SUITE: NodeKindSet = NodeKind::ReportAfterSuite.as_set();

    /// Every kind that may only be declared at the top level of a suite.
    pub const SUITE: NodeKindSet = Self::SUITE_SETUP
        .union(Self::SUITE_TEARDOWN)
        .union(Self::REPORT_AFTER_SUITE);

    /// Returns the union of two sets.
    pub const fn union(self, other: NodeKindSet) -> NodeKindSet {
        NodeKindSet(self.0 | other.0)
    }

    /// Returns `true` if `kind` is a member of this set.
    pub fn contains(self, kind: NodeKind) -> bool {
        self.0 & kind.as_set().0 != 0
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the member kinds in declaration order.
    pub fn iter(self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl BitOr for NodeKindSet {
    type Output = NodeKindSet;

    fn bitor(self, rhs: NodeKindSet) -> NodeKindSet {
        self.union(rhs)
    }
}

impl BitOr for NodeKind {
    type Output = NodeKindSet;

    fn bitor(self, rhs: NodeKind) -> NodeKindSet {
        self.as_set().union(rhs.as_set())
    }
}

impl From<NodeKind> for NodeKindSet {
    fn from(kind: NodeKind) -> Self {
        kind.as_set()
    }
}
