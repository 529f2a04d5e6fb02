use crate::db::ClauseRef;
use crate::idx::{LitVec, VarVec};
use crate::lit::{Lit, Var};

/// Value of a literal slot. `Marked` is a false literal that takes part in
/// the current resolution trace; outside of conflict analysis it behaves as `False`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LitState {
    #[default]
    Unset,
    False,
    Marked,
}

/// Stack of falsified literals with their reasons.
///
/// `stack[..forced]` is fixed before the current proof line,
/// `stack[..processed]` has been propagated, the rest is pending.
#[derive(Debug)]
pub struct Trail {
    state: LitVec<LitState>,
    reason: VarVec<Option<ClauseRef>>,
    stack: Vec<Lit>,
    pub(crate) processed: usize,
    pub(crate) forced: usize,
}

impl Trail {
    pub fn new(max_var: u32) -> Self {
        let n = max_var as usize;
        Self {
            state: LitVec::with_len(2 * n + 3),
            reason: VarVec::with_len(n + 2),
            stack: Vec::with_capacity(n),
            processed: 0,
            forced: 0,
        }
    }

    pub fn assigned(&self) -> usize {
        self.stack.len()
    }

    /// Falsified literal at trail position `i`.
    pub fn lit_at(&self, i: usize) -> Lit {
        self.stack[i]
    }

    pub fn state(&self, lit: Lit) -> LitState {
        self.state[lit]
    }

    pub fn is_false(&self, lit: Lit) -> bool {
        self.state[lit] != LitState::Unset
    }

    pub fn is_true(&self, lit: Lit) -> bool {
        self.is_false(-lit)
    }

    pub fn is_marked(&self, lit: Lit) -> bool {
        self.state[lit] == LitState::Marked
    }

    pub fn set_state(&mut self, lit: Lit, state: LitState) {
        self.state[lit] = state;
    }

    pub fn mark(&mut self, lit: Lit) {
        debug_assert!(self.is_false(lit));
        self.state[lit] = LitState::Marked;
    }

    pub fn reason(&self, var: Var) -> Option<ClauseRef> {
        self.reason[var]
    }

    pub fn clear_reason(&mut self, var: Var) {
        self.reason[var] = None;
    }

    /// Makes `lit` true, i.e. pushes `-lit` onto the stack.
    pub fn assign(&mut self, lit: Lit, reason: Option<ClauseRef>) {
        debug_assert!(!self.is_false(lit) && !self.is_true(lit), "{} is already assigned", lit);
        self.state[-lit] = LitState::False;
        self.stack.push(-lit);
        self.reason[lit.var()] = reason;
    }

    /// Drops `stack[len..]`, unassigning those literals.
    pub fn truncate(&mut self, len: usize) {
        while self.stack.len() > len {
            if let Some(lit) = self.stack.pop() {
                self.state[lit] = LitState::Unset;
                self.reason[lit.var()] = None;
            }
        }
    }

    /// Unassigns `lit` and everything assigned after it, then resets
    /// `forced` and `processed` to the new top of the stack.
    pub fn unassign_unit(&mut self, lit: Lit) {
        while self.is_true(lit) {
            match self.stack.pop() {
                Some(top) => {
                    self.state[top] = LitState::Unset;
                    self.reason[top.var()] = None;
                }
                None => break,
            }
        }
        self.forced = self.stack.len();
        self.processed = self.stack.len();
    }
}
