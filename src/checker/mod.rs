//! Two-pass DRUP checking engine.
//!
//! The [`Checker`] owns every structure of a single run. Each pass lives in
//! its own submodule.

use crate::clause::Clause;
use crate::db::{ClauseDb, ClauseRef};
use crate::idx::LitVec;
use crate::options::Options;
use crate::proof::ProofLine;
use crate::stats::Stats;
use crate::trail::Trail;
use crate::watch::{WatchLists, Watcher};

use self::load::ClauseTable;

mod analyze;
mod backward;
mod forward;
mod load;
mod propagate;


pub(crate) use self::load::Loaded;
pub(crate) use self::propagate::Propagation;

/// Entry of the step log, one per proof line read.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ProofStep {
    Add(ClauseRef),
    Delete(ClauseRef),
    /// Lemma satisfied by the fixed assignment in the forward pass.
    Satisfied(ClauseRef),
    /// Deletion that is not applied.
    Ignored,
}

/// Where the forward pass found its conflict.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Refutation {
    /// Propagating the formula alone.
    Formula,
    /// After processing the proof line with this index.
    Step(usize),
}

#[derive(Debug)]
pub(crate) struct Checker<'a> {
    options: Options,
    original: &'a [Clause],
    proof: &'a [ProofLine],
    db: ClauseDb,
    watches: WatchLists,
    trail: Trail,
    /// Database handle of every original clause, in input order.
    originals: Vec<ClauseRef>,
    steps: Vec<ProofStep>,
    table: ClauseTable,
    seen: LitVec<usize>,
    stamp: usize,
    pub(crate) stats: Stats,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(options: Options, original: &'a [Clause], proof: &'a [ProofLine]) -> Self {
        let max_var = original
            .iter()
            .chain(proof.iter().map(ProofLine::clause))
            .map(Clause::max_var)
            .max()
            .unwrap_or(0);
        let num_slots = 2 * max_var as usize + 3;
        let num_lits = original.iter().chain(proof.iter().map(ProofLine::clause)).map(|c| c.len() + 2).sum();

        Self {
            options,
            original,
            proof,
            db: ClauseDb::with_capacity(num_lits),
            watches: WatchLists::new(num_slots),
            trail: Trail::new(max_var),
            originals: Vec::with_capacity(original.len()),
            steps: Vec::with_capacity(proof.len()),
            table: ClauseTable::default(),
            seen: LitVec::with_len(num_slots),
            stamp: 0,
            stats: Stats::default(),
        }
    }

    /// Original clauses whose core bit is set, as given in the input.
    pub(crate) fn core(&self) -> Vec<Clause> {
        self.original
            .iter()
            .zip(self.originals.iter())
            .filter(|(_, cref)| self.db.is_core(**cref))
            .map(|(clause, _)| clause.clone())
            .collect()
    }

    fn attach(&mut self, cref: ClauseRef) {
        debug_assert!(self.db.is_watchable(cref));
        let core = self.db.is_core(cref);
        self.watches.insert(self.db.lit(cref, 0), Watcher::new(cref, core));
        self.watches.insert(self.db.lit(cref, 1), Watcher::new(cref, core));
    }

    fn detach(&mut self, cref: ClauseRef) {
        debug_assert!(self.db.is_watchable(cref));
        self.watches.remove(self.db.lit(cref, 0), cref);
        self.watches.remove(self.db.lit(cref, 1), cref);
    }

    /// Clause forced its first literal, which is still assigned.
    fn is_reason(&self, cref: ClauseRef) -> bool {
        let lit = self.db.lit(cref, 0);
        !lit.is_zero() && self.trail.is_true(lit) && self.trail.reason(lit.var()) == Some(cref)
    }

    fn is_satisfied(&self, cref: ClauseRef) -> bool {
        self.db.lits(cref).any(|lit| self.trail.is_true(lit))
    }

    /// Moves the non-false literals of the clause to the front.
    ///
    /// Returns whether some literal is true and the number of non-false literals.
    fn sort_unfalsified(&mut self, cref: ClauseRef) -> (bool, usize) {
        let mut satisfied = false;
        let mut size = 0;
        let mut i = 0;
        loop {
            let lit = self.db.lit(cref, i);
            if lit.is_zero() {
                break;
            }
            if !self.trail.is_false(lit) {
                satisfied |= self.trail.is_true(lit);
                self.db.swap(cref, i, size);
                size += 1;
            }
            i += 1;
        }
        (satisfied, size)
    }

    fn clause_of(&self, cref: ClauseRef) -> Clause {
        Clause::new(self.db.lits(cref).collect())
    }
}
