use std::fmt::{Display, Formatter};

use snafu::Snafu;

use crate::clause::Clause;

pub type Result<T, E = TrimError> = std::result::Result<T, E>;

/// Input section in which a malformed clause was found.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Part {
    Formula,
    Proof,
}

impl Display for Part {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::Formula => write!(f, "formula"),
            Part::Proof => write!(f, "proof"),
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TrimError {
    #[snafu(display("Literal 0 in {} clause #{}", part, index))]
    ZeroLiteral { part: Part, index: usize },

    #[snafu(display("Proof line #{} deletes {}, which matches no live clause", index, clause))]
    MalformedProof { index: usize, clause: Clause },

    #[snafu(display("Proof does not produce a conflict"))]
    ProofNotConflicting,

    #[snafu(display("Empty clause at proof line #{} is not implied by unit propagation", index))]
    ClaimedConflictNotFound { index: usize },

    #[snafu(display("Lemma {} at proof line #{} is not a RUP consequence", clause, index))]
    ContradictsUnsatClaim { index: usize, clause: Clause },
}
