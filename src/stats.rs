use std::fmt::{Display, Formatter};

/// Counters collected during one trimming run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Stats {
    pub lemmas: usize,
    pub deletions: usize,
    pub ignored_deletions: usize,
    pub satisfied_lemmas: usize,
    pub checked_lemmas: usize,
    pub skipped_lemmas: usize,
    pub resolutions: usize,
    pub propagations: usize,
    pub core_size: usize,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lemmas={} (checked={}, skipped={}, satisfied={}), deletions={} (ignored={}), resolutions={}, propagations={}, core={}",
            self.lemmas,
            self.checked_lemmas,
            self.skipped_lemmas,
            self.satisfied_lemmas,
            self.deletions,
            self.ignored_deletions,
            self.resolutions,
            self.propagations,
            self.core_size,
        )
    }
}
