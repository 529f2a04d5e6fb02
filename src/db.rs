use std::fmt::{Display, Formatter};

use crate::lit::Lit;

/// Handle of a clause run: the offset of its first literal in [`ClauseDb`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClauseRef(pub(crate) usize);

impl ClauseRef {
    pub const fn offset(self) -> usize {
        self.0
    }
}

impl Display for ClauseRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Append-only flat clause buffer.
///
/// Every clause is stored as a run `[id << 1 | core, lit_1, ..., lit_k, 0]`.
/// Bodies are never relocated, only permuted in place, so a [`ClauseRef`]
/// stays valid for the lifetime of the database.
#[derive(Debug, Default)]
pub struct ClauseDb {
    buffer: Vec<i32>,
    next_id: i32,
}

impl ClauseDb {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            next_id: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            next_id: 0,
        }
    }

    /// Number of clauses stored so far.
    pub fn num_clauses(&self) -> usize {
        self.next_id as usize
    }

    pub fn add_clause(&mut self, lits: &[Lit]) -> ClauseRef {
        debug_assert!(lits.iter().all(|lit| !lit.is_zero()));
        self.buffer.push(self.next_id << 1);
        self.next_id += 1;
        let cref = ClauseRef(self.buffer.len());
        self.buffer.extend(lits.iter().map(|lit| lit.get()));
        self.buffer.push(0);
        cref
    }

    /// Literal at position `i` of the clause. Position `len` yields [`Lit::ZERO`].
    pub fn lit(&self, cref: ClauseRef, i: usize) -> Lit {
        Lit::new(self.buffer[cref.0 + i])
    }

    pub fn set_lit(&mut self, cref: ClauseRef, i: usize, lit: Lit) {
        self.buffer[cref.0 + i] = lit.get();
    }

    pub fn swap(&mut self, cref: ClauseRef, i: usize, j: usize) {
        self.buffer.swap(cref.0 + i, cref.0 + j);
    }

    pub fn len(&self, cref: ClauseRef) -> usize {
        self.buffer[cref.0..].iter().position(|&x| x == 0).unwrap_or(0)
    }

    pub fn lits(&self, cref: ClauseRef) -> impl Iterator<Item = Lit> + '_ {
        self.buffer[cref.0..].iter().take_while(|&&x| x != 0).map(|&x| Lit::new(x))
    }

    pub fn id(&self, cref: ClauseRef) -> usize {
        (self.buffer[cref.0 - 1] >> 1) as usize
    }

    pub fn is_core(&self, cref: ClauseRef) -> bool {
        self.buffer[cref.0 - 1] & 1 != 0
    }

    /// Sets the core bit. Returns `true` if the clause was not marked before.
    pub fn set_core(&mut self, cref: ClauseRef) -> bool {
        let header = &mut self.buffer[cref.0 - 1];
        let fresh = *header & 1 == 0;
        *header |= 1;
        fresh
    }

    /// Clause has two literal slots to watch.
    pub fn is_watchable(&self, cref: ClauseRef) -> bool {
        self.buffer[cref.0] != 0 && self.buffer[cref.0 + 1] != 0
    }
}
