use crate::db::ClauseRef;
use crate::idx::LitVec;
use crate::lit::Lit;

/// Watch entry: clause handle shifted left by one, low bit is the core parity.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Watcher(usize);

impl Watcher {
    pub const fn new(cref: ClauseRef, core: bool) -> Self {
        Self((cref.0 << 1) | core as usize)
    }

    pub const fn clause(self) -> ClauseRef {
        ClauseRef(self.0 >> 1)
    }

    /// `1` for watchers of core clauses, `0` otherwise.
    pub const fn parity(self) -> usize {
        self.0 & 1
    }

    pub fn mark(&mut self) {
        self.0 |= 1;
    }
}

#[derive(Debug)]
pub struct WatchLists {
    lists: LitVec<Vec<Watcher>>,
}

impl WatchLists {
    /// Watch lists for literal slots `0..num_slots`.
    pub fn new(num_slots: usize) -> Self {
        Self {
            lists: LitVec::with_len(num_slots),
        }
    }

    pub fn get(&self, lit: Lit) -> &[Watcher] {
        &self.lists[lit]
    }

    pub fn len(&self, lit: Lit) -> usize {
        self.lists[lit].len()
    }

    pub fn watcher(&self, lit: Lit, i: usize) -> Watcher {
        self.lists[lit][i]
    }

    pub fn insert(&mut self, lit: Lit, watch: Watcher) {
        self.lists[lit].push(watch);
    }

    pub fn swap_remove(&mut self, lit: Lit, i: usize) -> Watcher {
        self.lists[lit].swap_remove(i)
    }

    /// Removes the watcher of `cref` from the list of `lit`.
    pub fn remove(&mut self, lit: Lit, cref: ClauseRef) {
        let list = &mut self.lists[lit];
        let pos = list.iter().position(|w| w.clause() == cref);
        debug_assert!(pos.is_some(), "no watcher of {} on {}", cref, lit);
        if let Some(i) = pos {
            list.swap_remove(i);
        }
    }

    /// Sets the parity bit of the watcher of `cref` in the list of `lit`.
    pub fn mark(&mut self, lit: Lit, cref: ClauseRef) {
        let watcher = self.lists[lit].iter_mut().find(|w| w.clause() == cref);
        debug_assert!(watcher.is_some(), "no watcher of {} on {}", cref, lit);
        if let Some(w) = watcher {
            w.mark();
        }
    }
}
