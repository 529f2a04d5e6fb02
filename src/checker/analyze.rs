use crate::db::ClauseRef;
use crate::trail::LitState;

use super::Checker;

impl Checker<'_> {
    /// Marks the conflict clause and every reason it transitively depends on
    /// as core, then unassigns everything above `forced`.
    pub(crate) fn analyze(&mut self, conflict: ClauseRef) {
        self.mark_clause(conflict, 0);
        self.trace_reasons();
    }

    /// Walks the trail from the top, marking the reason of each marked literal.
    ///
    /// Literals below `forced` are restored to plain `False`; the rest are
    /// unassigned. Leaves `processed == assigned == forced`.
    pub(crate) fn trace_reasons(&mut self) {
        let forced = self.trail.forced;
        for i in (0..self.trail.assigned()).rev() {
            let lit = self.trail.lit_at(i);
            if self.trail.is_marked(lit) {
                if let Some(reason) = self.trail.reason(lit.var()) {
                    self.mark_clause(reason, 1);
                }
            }
            if i < forced {
                self.trail.set_state(lit, LitState::False);
            }
        }
        self.trail.truncate(forced);
        self.trail.processed = forced;
    }

    /// Sets the core bit of the clause and marks its literals from `skip` on.
    fn mark_clause(&mut self, cref: ClauseRef, skip: usize) {
        self.stats.resolutions += 1;
        if self.db.set_core(cref) && self.db.is_watchable(cref) {
            self.watches.mark(self.db.lit(cref, 0), cref);
            self.watches.mark(self.db.lit(cref, 1), cref);
        }
        let mut i = skip;
        loop {
            let lit = self.db.lit(cref, i);
            if lit.is_zero() {
                break;
            }
            self.trail.mark(lit);
            i += 1;
        }
    }
}
