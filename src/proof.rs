use std::fmt::{Display, Formatter};

use crate::clause::Clause;
use crate::lit::Lit;

/// One line of a DRUP proof: a lemma addition or a clause deletion.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ProofLine {
    Add(Clause),
    Delete(Clause),
}

impl ProofLine {
    pub fn add<I>(lits: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Lit>,
    {
        ProofLine::Add(Clause::from(lits))
    }

    pub fn delete<I>(lits: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Lit>,
    {
        ProofLine::Delete(Clause::from(lits))
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, ProofLine::Delete(_))
    }

    pub fn clause(&self) -> &Clause {
        match self {
            ProofLine::Add(clause) | ProofLine::Delete(clause) => clause,
        }
    }
}

// DRUP text form, e.g. `d 1 -2 0`
impl Display for ProofLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_deletion() {
            write!(f, "d ")?;
        }
        for lit in self.clause().iter() {
            write!(f, "{} ", lit)?;
        }
        write!(f, "0")
    }
}
