use log::{debug, info};

use crate::error::{ClaimedConflictNotFoundSnafu, ProofNotConflictingSnafu, Result};

use super::{Checker, ProofStep, Propagation, Refutation};

impl Checker<'_> {
    /// Replays the proof until the first conflict.
    ///
    /// Deletions of reasons and of satisfied clauses are turned into
    /// [`ProofStep::Ignored`], lemmas satisfied by the fixed assignment
    /// into [`ProofStep::Satisfied`].
    pub(crate) fn verify_forward(&mut self) -> Result<Refutation> {
        if self.propagate() == Propagation::Conflict {
            info!("Formula is refuted by unit propagation");
            return Ok(Refutation::Formula);
        }
        self.trail.forced = self.trail.processed;

        for index in 0..self.steps.len() {
            match self.steps[index] {
                ProofStep::Delete(cref) => {
                    if self.is_reason(cref) || self.is_satisfied(cref) {
                        debug!("Ignoring deletion of reason or satisfied clause {} at proof line #{}", cref, index);
                        self.steps[index] = ProofStep::Ignored;
                        self.stats.ignored_deletions += 1;
                    } else {
                        self.detach(cref);
                    }
                }
                ProofStep::Add(cref) => {
                    let (satisfied, size) = self.sort_unfalsified(cref);
                    if satisfied {
                        debug!("Lemma {} at proof line #{} is already satisfied", self.clause_of(cref), index);
                        self.steps[index] = ProofStep::Satisfied(cref);
                        self.stats.satisfied_lemmas += 1;
                        continue;
                    }
                    if self.db.is_watchable(cref) {
                        self.attach(cref);
                    }
                    match size {
                        0 => {
                            return match self.propagate() {
                                Propagation::Conflict => Ok(Refutation::Step(index)),
                                Propagation::Drained => ClaimedConflictNotFoundSnafu { index }.fail(),
                            };
                        }
                        1 => {
                            let unit = self.db.lit(cref, 0);
                            self.trail.assign(unit, Some(cref));
                            if self.propagate() == Propagation::Conflict {
                                info!("Conflict after unit lemma {} at proof line #{}", unit, index);
                                return Ok(Refutation::Step(index));
                            }
                            self.trail.forced = self.trail.processed;
                        }
                        _ => {}
                    }
                }
                ProofStep::Satisfied(_) | ProofStep::Ignored => {}
            }
        }

        ProofNotConflictingSnafu.fail()
    }
}
