use log::info;

use crate::checker::{Checker, Loaded, Refutation};
use crate::clause::Clause;
use crate::error::Result;
use crate::options::{Options, DEFAULT_OPTIONS};
use crate::proof::ProofLine;
use crate::stats::Stats;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DrupResult {
    /// The formula contains the empty clause or two clashing unit clauses.
    pub trivial_unsat: bool,
    /// Original clauses needed for the refutation, in input order.
    pub unsat_core: Vec<Clause>,
    pub stats: Stats,
}

/// DRUP proof checker and unsat-core extractor.
///
/// Holds only configuration: every call to [`DrupTrim::compute`] builds and
/// drops its own clause database, so one instance can be shared freely.
#[derive(Debug, Copy, Clone)]
pub struct DrupTrim {
    options: Options,
}

impl DrupTrim {
    pub const fn new() -> Self {
        Self::with_options(DEFAULT_OPTIONS)
    }

    pub const fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Checks `proof` against `original` and returns the clauses of `original`
    /// the refutation depends on.
    ///
    /// A trivially unsatisfiable formula is reported without reading the proof.
    pub fn compute(&self, original: &[Clause], proof: &[ProofLine]) -> Result<DrupResult> {
        info!(
            "Trimming {} original clauses with {} proof lines",
            original.len(),
            proof.len()
        );
        let mut checker = Checker::new(self.options, original, proof);

        if checker.load_formula()? == Loaded::Trivial {
            info!("Formula is trivially unsatisfiable");
            return Ok(DrupResult {
                trivial_unsat: true,
                unsat_core: Vec::new(),
                stats: checker.stats,
            });
        }

        checker.load_proof()?;
        match checker.verify_forward()? {
            Refutation::Formula => {}
            Refutation::Step(index) => checker.extract_core(index)?,
        }

        let unsat_core = checker.core();
        let mut stats = checker.stats;
        stats.core_size = unsat_core.len();
        info!("Core has {} of {} clauses", unsat_core.len(), original.len());
        info!("Stats: {}", stats);

        Ok(DrupResult {
            trivial_unsat: false,
            unsat_core,
            stats,
        })
    }
}

impl Default for DrupTrim {
    fn default() -> Self {
        Self::new()
    }
}

/// [`DrupTrim::compute`] with default options.
pub fn compute(original: &[Clause], proof: &[ProofLine]) -> Result<DrupResult> {
    DrupTrim::new().compute(original, proof)
}
