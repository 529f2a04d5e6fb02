use itertools::Itertools;

/// Largest variable mentioned in `clauses`.
pub fn num_vars(clauses: &[Vec<i32>]) -> u32 {
    clauses.iter().flatten().map(|lit| lit.unsigned_abs()).max().unwrap_or(0)
}

/// Brute-force satisfiability check over all assignments.
pub fn is_satisfiable(clauses: &[Vec<i32>]) -> bool {
    let n = num_vars(clauses);
    assert!(n <= 20, "too many variables for brute force: {}", n);
    (0u32..1 << n).any(|bits| {
        clauses.iter().all(|clause| {
            clause.iter().any(|&lit| {
                let value = (bits >> (lit.unsigned_abs() - 1)) & 1 == 1;
                value == (lit > 0)
            })
        })
    })
}

/// RUP refutation of any unsatisfiable formula over variables `1..=num_vars`.
///
/// For `k` from `num_vars` down to 1, adds every clause over variables `1..=k`.
/// Each such clause follows by unit propagation from its two extensions
/// on variable `k + 1` (or from the formula itself when `k == num_vars`).
/// Ends with the empty clause.
pub fn exhaustive_rup_proof(num_vars: u32) -> Vec<Vec<i32>> {
    let mut proof = Vec::new();
    for k in (1..=num_vars as i32).rev() {
        proof.extend((1..=k).map(|v| [v, -v]).multi_cartesian_product());
    }
    proof.push(Vec::new());
    proof
}

/// Pigeonhole formula: `pigeons` pigeons, each in one of `holes` holes, no two sharing a hole.
pub fn pigeonhole(pigeons: i32, holes: i32) -> Vec<Vec<i32>> {
    let var = |p: i32, h: i32| p * holes + h + 1;
    let mut clauses: Vec<Vec<i32>> = (0..pigeons).map(|p| (0..holes).map(|h| var(p, h)).collect()).collect();
    for h in 0..holes {
        for (p, q) in (0..pigeons).tuple_combinations() {
            clauses.push(vec![-var(p, h), -var(q, h)]);
        }
    }
    clauses
}
