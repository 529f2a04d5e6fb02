use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

use drup_trim::{compute, Clause, DrupResult, DrupTrim, Options, ProofLine, DEFAULT_OPTIONS};
use drup_trim_test_utils::{exhaustive_rup_proof, is_satisfiable, num_vars};

/// Random CNF over at most 4 variables with up to 10 short clauses.
#[derive(Debug, Clone)]
struct SmallCnf {
    clauses: Vec<Vec<i32>>,
}

impl Arbitrary for SmallCnf {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vars = u32::arbitrary(g) % 4 + 1;
        let num_clauses = usize::arbitrary(g) % 10 + 1;
        let clauses = (0..num_clauses)
            .map(|_| {
                let len = usize::arbitrary(g) % 3 + 1;
                (0..len)
                    .map(|_| {
                        let var = (u32::arbitrary(g) % num_vars + 1) as i32;
                        if bool::arbitrary(g) {
                            var
                        } else {
                            -var
                        }
                    })
                    .collect()
            })
            .collect();
        SmallCnf { clauses }
    }
}

impl SmallCnf {
    fn formula(&self) -> Vec<Clause> {
        self.clauses.iter().map(Clause::from).collect()
    }

    fn proof(&self) -> Vec<ProofLine> {
        exhaustive_rup_proof(num_vars(&self.clauses))
            .iter()
            .map(ProofLine::add)
            .collect()
    }
}

fn to_ints(clauses: &[Clause]) -> Vec<Vec<i32>> {
    clauses.iter().map(|c| c.iter().map(|lit| lit.get()).collect()).collect()
}

fn is_subsequence(sub: &[Clause], seq: &[Clause]) -> bool {
    let mut rest = seq.iter();
    sub.iter().all(|c| rest.any(|x| x == c))
}

fn is_valid_core(result: &DrupResult, formula: &[Clause]) -> bool {
    if result.trivial_unsat {
        return result.unsat_core.is_empty();
    }
    is_subsequence(&result.unsat_core, formula)
        && !is_satisfiable(&to_ints(&result.unsat_core))
        && result.stats.core_size == result.unsat_core.len()
}

#[quickcheck]
fn unsat_core_is_unsat_subset(cnf: SmallCnf) -> color_eyre::Result<TestResult> {
    if is_satisfiable(&cnf.clauses) {
        return Ok(TestResult::discard());
    }
    let formula = cnf.formula();
    let result = compute(&formula, &cnf.proof())?;
    Ok(TestResult::from_bool(is_valid_core(&result, &formula)))
}

#[quickcheck]
fn unsat_core_without_core_first(cnf: SmallCnf) -> color_eyre::Result<TestResult> {
    if is_satisfiable(&cnf.clauses) {
        return Ok(TestResult::discard());
    }
    let formula = cnf.formula();
    let trim = DrupTrim::with_options(Options {
        core_first: false,
        ..DEFAULT_OPTIONS
    });
    let result = trim.compute(&formula, &cnf.proof())?;
    Ok(TestResult::from_bool(is_valid_core(&result, &formula)))
}

#[quickcheck]
fn satisfiable_formula_is_rejected(cnf: SmallCnf) -> TestResult {
    if !is_satisfiable(&cnf.clauses) {
        return TestResult::discard();
    }
    TestResult::from_bool(compute(&cnf.formula(), &cnf.proof()).is_err())
}

#[quickcheck]
fn trimming_is_deterministic(cnf: SmallCnf) -> bool {
    let formula = cnf.formula();
    let proof = cnf.proof();
    match (compute(&formula, &proof), compute(&formula, &proof)) {
        (Ok(first), Ok(second)) => first == second,
        (Err(first), Err(second)) => first.to_string() == second.to_string(),
        _ => false,
    }
}
