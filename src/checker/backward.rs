use log::{debug, info};

use crate::db::ClauseRef;
use crate::error::{ContradictsUnsatClaimSnafu, Result};

use super::{Checker, ProofStep, Propagation};

impl Checker<'_> {
    /// Walks the step log from the conflicting line back to the first one,
    /// undoing each step and checking every core lemma.
    pub(crate) fn extract_core(&mut self, conflict_step: usize) -> Result<()> {
        info!("Backward check from proof line #{}", conflict_step);
        self.trail.forced = self.trail.processed;

        for index in (0..=conflict_step).rev() {
            match self.steps[index] {
                ProofStep::Delete(cref) => {
                    self.sort_unfalsified(cref);
                    self.attach(cref);
                }
                ProofStep::Satisfied(_) | ProofStep::Ignored => {}
                ProofStep::Add(cref) => {
                    if self.db.is_watchable(cref) {
                        self.detach(cref);
                    }
                    let first = self.db.lit(cref, 0);
                    if !first.is_zero() && self.trail.reason(first.var()) == Some(cref) {
                        self.trail.unassign_unit(first);
                    }

                    if !self.db.is_core(cref) {
                        self.stats.skipped_lemmas += 1;
                        continue;
                    }
                    self.check_rup(index, cref)?;
                    self.stats.checked_lemmas += 1;
                }
            }
        }

        Ok(())
    }

    /// Checks that assuming the negation of the lemma propagates to a conflict.
    fn check_rup(&mut self, index: usize, cref: ClauseRef) -> Result<()> {
        debug!("Checking lemma {} at proof line #{}", self.clause_of(cref), index);

        let mut i = 0;
        loop {
            let lit = self.db.lit(cref, i);
            if lit.is_zero() {
                break;
            }
            i += 1;
            if self.trail.is_false(lit) {
                continue;
            }
            if self.trail.is_true(lit) {
                // Implied by the trail alone: its reasons justify the lemma.
                self.trail.mark(-lit);
                self.trace_reasons();
                return Ok(());
            }
            self.trail.assign(-lit, None);
        }

        match self.propagate() {
            Propagation::Conflict => Ok(()),
            Propagation::Drained => ContradictsUnsatClaimSnafu {
                index,
                clause: self.proof[index].clause().clone(),
            }
            .fail(),
        }
    }
}
