//! DRUP proof checking and unsatisfiable-core extraction.
//!
//! Given a CNF formula and a DRUP refutation of it, [`compute`] verifies the
//! lemmas the refutation actually needs and returns the original clauses
//! they depend on.

pub mod clause;
pub mod db;
pub mod error;
pub mod idx;
pub mod lit;
pub mod options;
pub mod proof;
pub mod stats;
pub mod trail;
pub mod trim;
pub mod watch;

mod checker;

pub use clause::Clause;
pub use error::{Part, Result, TrimError};
pub use lit::{Lit, Var};
pub use options::{Options, DEFAULT_OPTIONS};
pub use proof::ProofLine;
pub use stats::Stats;
pub use trim::{compute, DrupResult, DrupTrim};
