use test_log::test;

use drup_trim::{compute, Clause, DrupTrim, Options, ProofLine, TrimError, DEFAULT_OPTIONS};
use drup_trim_test_utils::{exhaustive_rup_proof, pigeonhole};

fn cnf(clauses: &[&[i32]]) -> Vec<Clause> {
    clauses.iter().map(|c| Clause::from(c.iter())).collect()
}

fn add(lits: &[i32]) -> ProofLine {
    ProofLine::add(lits.iter())
}

fn del(lits: &[i32]) -> ProofLine {
    ProofLine::delete(lits.iter())
}

fn lemmas(clauses: &[Vec<i32>]) -> Vec<ProofLine> {
    clauses.iter().map(ProofLine::add).collect()
}

/// Minimally unsatisfiable: every clause is needed.
fn four_clauses() -> Vec<Clause> {
    cnf(&[&[1, 2], &[1, -2], &[-1, 3], &[-1, -3]])
}

#[test]
fn test_trivial_complementary_units() -> color_eyre::Result<()> {
    let formula = cnf(&[&[1], &[-1]]);
    let result = compute(&formula, &[add(&[])])?;
    assert!(result.trivial_unsat);
    assert!(result.unsat_core.is_empty());
    Ok(())
}

#[test]
fn test_trivial_empty_clause_ignores_proof() -> color_eyre::Result<()> {
    let formula = cnf(&[&[1, 2], &[]]);
    // Not even a valid proof: it is never read.
    let result = compute(&formula, &[del(&[7, 8])])?;
    assert!(result.trivial_unsat);
    assert!(result.unsat_core.is_empty());
    Ok(())
}

#[test]
fn test_minimal_unsat_by_propagation() -> color_eyre::Result<()> {
    let formula = cnf(&[&[1, 2], &[-1], &[-2]]);
    let result = compute(&formula, &[add(&[])])?;
    assert!(!result.trivial_unsat);
    assert_eq!(result.unsat_core, formula);
    assert_eq!(result.stats.core_size, 3);
    Ok(())
}

#[test]
fn test_irrelevant_clause_excluded() -> color_eyre::Result<()> {
    let formula = cnf(&[&[1, 2], &[3, 4], &[-1], &[-2]]);
    let result = compute(&formula, &[add(&[])])?;
    assert!(!result.trivial_unsat);
    assert_eq!(result.unsat_core, cnf(&[&[1, 2], &[-1], &[-2]]));
    Ok(())
}

#[test]
fn test_core_keeps_clauses_as_given() -> color_eyre::Result<()> {
    let formula = cnf(&[&[2, 1, 2], &[-1, -1], &[5, 6], &[-2]]);
    let result = compute(&formula, &[add(&[])])?;
    assert_eq!(result.unsat_core, cnf(&[&[2, 1, 2], &[-1, -1], &[-2]]));
    Ok(())
}

#[test]
fn test_claimed_conflict_not_found() {
    let formula = cnf(&[&[1]]);
    let result = compute(&formula, &[add(&[])]);
    assert!(matches!(result, Err(TrimError::ClaimedConflictNotFound { index: 0 })));
}

#[test]
fn test_proof_not_conflicting() {
    let formula = cnf(&[&[1, 2], &[-1, 2]]);
    let result = compute(&formula, &[add(&[2])]);
    assert!(matches!(result, Err(TrimError::ProofNotConflicting)));
}

#[test]
fn test_refutation_with_lemmas() -> color_eyre::Result<()> {
    let formula = four_clauses();
    let proof = vec![add(&[1]), add(&[])];
    let result = compute(&formula, &proof)?;
    assert!(!result.trivial_unsat);
    assert_eq!(result.unsat_core, formula);
    assert_eq!(result.stats.checked_lemmas, 1);
    Ok(())
}

#[test]
fn test_unused_invalid_lemma_is_not_checked() -> color_eyre::Result<()> {
    let formula = four_clauses();
    let proof = vec![add(&[5]), add(&[1]), add(&[])];
    let result = compute(&formula, &proof)?;
    assert_eq!(result.unsat_core, formula);
    assert_eq!(result.stats.skipped_lemmas, 1);
    assert_eq!(result.stats.checked_lemmas, 1);
    Ok(())
}

#[test]
fn test_invalid_core_lemma_is_rejected() {
    // Satisfiable; [-2] is not implied, but the refutation relies on it.
    let formula = cnf(&[&[1, 2], &[-1, 2]]);
    let proof = vec![add(&[-2]), add(&[])];
    let result = compute(&formula, &proof);
    match result {
        Err(TrimError::ContradictsUnsatClaim { index, clause }) => {
            assert_eq!(index, 0);
            assert_eq!(clause, Clause::from([-2]));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_deletion_is_respected() {
    let formula = four_clauses();
    let proof = vec![
        add(&[1, 3]),
        add(&[1, -3]),
        del(&[1, 2]),
        del(&[1, -2]),
        del(&[1, 3]),
        add(&[1]),
        add(&[]),
    ];
    let result = compute(&formula, &proof);
    match result {
        Err(TrimError::ContradictsUnsatClaim { index, clause }) => {
            assert_eq!(index, 5);
            assert_eq!(clause, Clause::from([1]));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_deletions_not_needed() -> color_eyre::Result<()> {
    let formula = four_clauses();
    let proof = vec![add(&[1, 3]), add(&[1, -3]), del(&[1, 2]), del(&[1, -2]), add(&[1]), add(&[])];
    let result = compute(&formula, &proof)?;
    assert_eq!(result.unsat_core, formula);
    assert_eq!(result.stats.deletions, 2);
    assert_eq!(result.stats.ignored_deletions, 0);
    assert_eq!(result.stats.checked_lemmas, 3);
    Ok(())
}

#[test]
fn test_ignore_deletions() -> color_eyre::Result<()> {
    let formula = four_clauses();
    let proof = vec![
        add(&[1, 3]),
        add(&[1, -3]),
        del(&[1, 2]),
        del(&[1, -2]),
        del(&[1, 3]),
        add(&[1]),
        add(&[]),
    ];
    let trim = DrupTrim::with_options(Options {
        ignore_deletions: true,
        ..DEFAULT_OPTIONS
    });
    let result = trim.compute(&formula, &proof)?;
    assert_eq!(result.unsat_core, formula);
    assert_eq!(result.stats.ignored_deletions, 3);
    Ok(())
}

#[test]
fn test_unmatched_deletion() -> color_eyre::Result<()> {
    let formula = four_clauses();
    let proof = vec![del(&[2, 3]), add(&[1]), add(&[])];

    let result = compute(&formula, &proof);
    assert!(matches!(result, Err(TrimError::MalformedProof { index: 0, .. })));

    let trim = DrupTrim::with_options(Options {
        strict_deletions: false,
        ..DEFAULT_OPTIONS
    });
    let result = trim.compute(&formula, &proof)?;
    assert_eq!(result.unsat_core, formula);
    assert_eq!(result.stats.ignored_deletions, 1);
    Ok(())
}

#[test]
fn test_deleting_a_reason_is_ignored() -> color_eyre::Result<()> {
    // 2 is forced by [-1, 2] as soon as 1 is fixed.
    let formula = cnf(&[&[1], &[-1, 2], &[-2, 3, 4], &[-3, 4], &[-3, -4], &[3, -4]]);
    let proof = vec![del(&[-1, 2]), add(&[3]), add(&[])];
    let result = compute(&formula, &proof)?;
    assert_eq!(result.stats.ignored_deletions, 1);
    assert_eq!(result.unsat_core, formula);
    Ok(())
}

#[test]
fn test_satisfied_lemma_is_skipped() -> color_eyre::Result<()> {
    let formula = cnf(&[&[1], &[-1, 2, 3], &[-2, 3], &[-3, 4], &[-3, -4]]);
    let proof = vec![add(&[1, 7]), add(&[-3]), add(&[])];
    let result = compute(&formula, &proof)?;
    assert_eq!(result.stats.satisfied_lemmas, 1);
    assert_eq!(result.unsat_core, formula);
    Ok(())
}

#[test]
fn test_zero_literal() {
    let result = compute(&cnf(&[&[1, 0]]), &[]);
    assert!(matches!(result, Err(TrimError::ZeroLiteral { index: 0, .. })));

    let result = compute(&four_clauses(), &[add(&[0])]);
    assert!(matches!(result, Err(TrimError::ZeroLiteral { index: 0, .. })));
}

#[test]
fn test_pigeonhole_core() -> color_eyre::Result<()> {
    let php = pigeonhole(3, 2);
    let formula: Vec<Clause> = php.iter().map(Clause::from).collect();
    let proof = lemmas(&exhaustive_rup_proof(6));

    for core_first in [true, false] {
        let trim = DrupTrim::with_options(Options {
            core_first,
            ..DEFAULT_OPTIONS
        });
        let result = trim.compute(&formula, &proof)?;
        assert!(!result.trivial_unsat);
        assert_eq!(result.unsat_core, formula);
    }
    Ok(())
}

#[test]
fn test_deterministic() -> color_eyre::Result<()> {
    let mut formula: Vec<Clause> = pigeonhole(3, 2).iter().map(Clause::from).collect();
    formula.push(Clause::from([7, 8]));
    let proof = lemmas(&exhaustive_rup_proof(6));

    let first = compute(&formula, &proof)?;
    let second = DrupTrim::new().compute(&formula, &proof)?;
    assert_eq!(first, second);
    assert_eq!(first.unsat_core.len(), formula.len() - 1);
    Ok(())
}
