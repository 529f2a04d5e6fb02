use std::collections::HashMap;

use log::{debug, info, warn};
use snafu::ensure;

use crate::clause::Clause;
use crate::db::{ClauseDb, ClauseRef};
use crate::error::{MalformedProofSnafu, Part, Result, ZeroLiteralSnafu};
use crate::lit::Lit;
use crate::proof::ProofLine;

use super::{Checker, ProofStep};

/// Outcome of loading the formula.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Loaded {
    /// Empty clause or a pair of clashing unit clauses.
    Trivial,
    Ready,
}

/// Order-independent structural hash of a duplicate-free clause.
pub(crate) fn clause_hash(lits: &[Lit]) -> u64 {
    let mut sum: u64 = 0;
    let mut prod: u64 = 1;
    let mut xor: u64 = 0;
    for lit in lits {
        let x = lit.get() as i64 as u64;
        sum = sum.wrapping_add(x);
        prod = prod.wrapping_mul(x);
        xor ^= x;
    }
    1023u64.wrapping_mul(sum).wrapping_add(prod ^ 31u64.wrapping_mul(xor))
}

/// Live clauses bucketed by [`clause_hash`], used to resolve deletions.
#[derive(Debug, Default)]
pub(crate) struct ClauseTable {
    buckets: HashMap<u64, Vec<ClauseRef>>,
}

impl ClauseTable {
    pub(crate) fn insert(&mut self, lits: &[Lit], cref: ClauseRef) {
        self.buckets.entry(clause_hash(lits)).or_default().push(cref);
    }

    /// Finds a clause with exactly the literals of `lits`, which must be
    /// duplicate-free and satisfy `is_member` for every one of them.
    /// When `remove` is set, the match is taken out of the table.
    pub(crate) fn find<F>(&mut self, db: &ClauseDb, lits: &[Lit], is_member: F, remove: bool) -> Option<ClauseRef>
    where
        F: Fn(Lit) -> bool,
    {
        let bucket = self.buckets.get_mut(&clause_hash(lits))?;
        let pos = bucket
            .iter()
            .position(|&cref| db.len(cref) == lits.len() && db.lits(cref).all(&is_member))?;
        if remove {
            Some(bucket.swap_remove(pos))
        } else {
            Some(bucket[pos])
        }
    }
}

impl Checker<'_> {
    /// Copies the literals of `clause` without duplicates.
    ///
    /// Leaves the `seen` stamps of the result set until the next call.
    fn normalize(&mut self, clause: &Clause, part: Part, index: usize) -> Result<Vec<Lit>> {
        ensure!(clause.iter().all(|lit| !lit.is_zero()), ZeroLiteralSnafu { part, index });

        self.stamp += 1;
        let mut lits = Vec::with_capacity(clause.len());
        for &lit in clause.iter() {
            if self.seen[lit] == self.stamp {
                warn!("Duplicate literal {} in {} clause #{}", lit, part, index);
            } else {
                self.seen[lit] = self.stamp;
                lits.push(lit);
            }
        }
        Ok(lits)
    }

    /// Adds every original clause to the database.
    ///
    /// Unit clauses are assigned right away, longer clauses are watched.
    pub(crate) fn load_formula(&mut self) -> Result<Loaded> {
        let original = self.original;
        for (index, clause) in original.iter().enumerate() {
            let lits = self.normalize(clause, Part::Formula, index)?;
            let cref = self.db.add_clause(&lits);
            self.originals.push(cref);
            self.table.insert(&lits, cref);

            match lits[..] {
                [] => {
                    info!("Formula contains the empty clause #{}", index);
                    return Ok(Loaded::Trivial);
                }
                [lit] => {
                    if self.trail.is_false(lit) {
                        info!("Unit clause #{} clashes with an earlier unit", index);
                        return Ok(Loaded::Trivial);
                    }
                    if !self.trail.is_true(lit) {
                        self.trail.assign(lit, Some(cref));
                    }
                }
                _ => self.attach(cref),
            }
        }
        debug!(
            "Loaded {} original clauses, {} units fixed",
            self.originals.len(),
            self.trail.assigned()
        );
        Ok(Loaded::Ready)
    }

    /// Reads the proof into the step log, resolving deletions to clause handles.
    ///
    /// Reading stops after the first empty lemma.
    pub(crate) fn load_proof(&mut self) -> Result<()> {
        let proof = self.proof;
        for (index, line) in proof.iter().enumerate() {
            let lits = self.normalize(line.clause(), Part::Proof, index)?;
            match line {
                ProofLine::Delete(clause) => {
                    self.stats.deletions += 1;
                    let step = self.resolve_deletion(index, clause, &lits)?;
                    if step == ProofStep::Ignored {
                        self.stats.ignored_deletions += 1;
                    }
                    self.steps.push(step);
                }
                ProofLine::Add(_) => {
                    self.stats.lemmas += 1;
                    let cref = self.db.add_clause(&lits);
                    self.table.insert(&lits, cref);
                    self.steps.push(ProofStep::Add(cref));
                    if lits.is_empty() {
                        debug!("Empty lemma at proof line #{}", index);
                        break;
                    }
                }
            }
        }
        info!(
            "Loaded {} of {} proof lines ({} lemmas, {} deletions)",
            self.steps.len(),
            proof.len(),
            self.stats.lemmas,
            self.stats.deletions
        );
        Ok(())
    }

    fn resolve_deletion(&mut self, index: usize, clause: &Clause, lits: &[Lit]) -> Result<ProofStep> {
        if self.options.ignore_deletions {
            return Ok(ProofStep::Ignored);
        }

        // Unit deletions never apply, but they must still name a known clause.
        let is_unit = lits.len() <= 1;
        let stamp = self.stamp;
        let seen = &self.seen;
        let found = self.table.find(&self.db, lits, |lit| seen[lit] == stamp, !is_unit);

        match found {
            Some(cref) if !is_unit => Ok(ProofStep::Delete(cref)),
            Some(_) => {
                debug!("Ignoring deletion of unit clause {} at proof line #{}", clause, index);
                Ok(ProofStep::Ignored)
            }
            None => {
                ensure!(
                    !self.options.strict_deletions,
                    MalformedProofSnafu {
                        index,
                        clause: clause.clone()
                    }
                );
                warn!("Ignoring deletion of unknown clause {} at proof line #{}", clause, index);
                Ok(ProofStep::Ignored)
            }
        }
    }
}
