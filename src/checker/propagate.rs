use log::trace;

use crate::lit::Lit;

use super::Checker;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Propagation {
    /// A clause became false; conflict analysis has already run.
    Conflict,
    /// Every literal on the trail has been propagated.
    Drained,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    ScanCore,
    ScanRest,
    Conflict,
    Drained,
}

// Index of the core scan into the cursor array.
const CORE: usize = 1;
const REST: usize = 0;

/// Scan state shared by both passes of one propagation call.
struct Scan {
    cursor: [usize; 2],
    /// Rest-pass position to continue from after a detour through the core pass.
    resume: Option<(Lit, usize)>,
}

impl Checker<'_> {
    /// Boolean constraint propagation over the pending part of the trail.
    ///
    /// With `core_first`, watchers of core clauses are visited in a separate
    /// pass that runs before, and is re-entered after each unit found by,
    /// the pass over the remaining watchers.
    pub(crate) fn propagate(&mut self) -> Propagation {
        let mut scan = Scan {
            cursor: [self.trail.processed; 2],
            resume: None,
        };
        let mut phase = if self.options.core_first {
            Phase::ScanCore
        } else {
            Phase::ScanRest
        };

        loop {
            phase = match phase {
                Phase::ScanCore => self.scan(CORE, &mut scan),
                Phase::ScanRest => self.scan(REST, &mut scan),
                Phase::Conflict => return Propagation::Conflict,
                Phase::Drained => {
                    self.trail.processed = self.trail.assigned();
                    return Propagation::Drained;
                }
            }
        }
    }

    fn scan(&mut self, parity: usize, scan: &mut Scan) -> Phase {
        let split = self.options.core_first;

        while scan.cursor[parity] < self.trail.assigned() {
            let lit = self.trail.lit_at(scan.cursor[parity]);
            scan.cursor[parity] += 1;

            let mut wi = 0;
            if parity == REST {
                if let Some((prev, pos)) = scan.resume.take() {
                    if prev == lit {
                        wi = pos;
                    }
                }
            }

            'watches: while wi < self.watches.len(lit) {
                let watcher = self.watches.watcher(lit, wi);
                if split && watcher.parity() != parity {
                    wi += 1;
                    continue;
                }

                let cref = watcher.clause();
                let first = self.db.lit(cref, 0);
                let second = self.db.lit(cref, 1);
                if self.trail.is_true(first) || self.trail.is_true(second) {
                    wi += 1;
                    continue;
                }
                if first == lit {
                    self.db.swap(cref, 0, 1);
                }
                debug_assert_eq!(self.db.lit(cref, 1), lit);

                let mut k = 2;
                loop {
                    let other = self.db.lit(cref, k);
                    if other.is_zero() {
                        break;
                    }
                    if !self.trail.is_false(other) {
                        self.db.swap(cref, 1, k);
                        let moved = self.watches.swap_remove(lit, wi);
                        self.watches.insert(other, moved);
                        continue 'watches;
                    }
                    k += 1;
                }

                let unit = self.db.lit(cref, 0);
                wi += 1;
                if self.trail.is_false(unit) {
                    trace!("Conflict in clause {} while propagating {}", cref, -lit);
                    self.analyze(cref);
                    return Phase::Conflict;
                }

                trace!("Propagated {} by clause {}", unit, cref);
                self.trail.assign(unit, Some(cref));
                self.stats.propagations += 1;
                if split && parity == REST {
                    scan.cursor[REST] -= 1;
                    scan.resume = Some((lit, wi));
                    return Phase::ScanCore;
                }
            }
        }

        if parity == CORE {
            Phase::ScanRest
        } else {
            Phase::Drained
        }
    }
}
