#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Options {
    /// Scan watchers of core clauses before the rest during propagation.
    pub core_first: bool,
    /// Reject deletions of clauses that are not in the database.
    pub strict_deletions: bool,
    /// Treat every deletion as a no-op.
    pub ignore_deletions: bool,
}

pub const DEFAULT_OPTIONS: Options = Options {
    core_first: true,
    strict_deletions: true,
    ignore_deletions: false,
};

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}
