//! Concurrency stress testing for validity checkers
//!
//! Many threads query one shared checker and compare every answer with a
//! single-threaded baseline:
//! - Validity and clearance must match the baseline exactly
//! - The capabilities descriptor must be unchanged afterwards

use std::time::{Duration, Instant};

use freespace_core::{RealVectorBounds, RealVectorState};
use freespace_validity::{StateOf, StateValidityChecker, ValidityCapabilities};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::{FuzzerConfig, ValidityFuzzer};

/// Stress configuration
#[derive(Clone, Debug)]
pub struct StressConfig {
    /// Number of concurrent query threads
    pub threads: usize,
    /// Passes over the state set per thread
    pub iterations_per_thread: usize,
    /// Number of states to generate when the harness builds its own set
    pub state_count: usize,
    /// Random seed for generated states
    pub seed: u64,
}

impl Default for StressConfig {
    fn default() -> Self {
        StressConfig {
            threads: 8,
            iterations_per_thread: 50,
            state_count: 256,
            seed: 7,
        }
    }
}

impl StressConfig {
    /// Light stress for quick tests
    pub fn light() -> Self {
        StressConfig {
            threads: 4,
            iterations_per_thread: 10,
            state_count: 64,
            seed: 7,
        }
    }
}

/// A concurrent answer that differed from the baseline
#[derive(Clone, Debug, PartialEq)]
pub struct StressMismatch {
    pub thread: usize,
    pub state_index: usize,
    /// Baseline `is_valid_with_clearance` answer
    pub expected: (bool, f64),
    /// Concurrent `is_valid_with_clearance` answer
    pub actual: (bool, f64),
    /// Concurrent `is_valid` answer
    pub plain: bool,
}

/// Stress run result
#[derive(Clone, Debug)]
pub struct StressResult {
    pub queries: u64,
    pub mismatches: Vec<StressMismatch>,
    pub capabilities_before: ValidityCapabilities,
    pub capabilities_after: ValidityCapabilities,
    pub elapsed: Duration,
}

impl StressResult {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty() && self.capabilities_before == self.capabilities_after
    }
}

/// Concurrency stress harness
pub struct StressHarness {
    config: StressConfig,
}

impl StressHarness {
    pub fn new(config: StressConfig) -> Self {
        StressHarness { config }
    }

    pub fn config(&self) -> &StressConfig {
        &self.config
    }

    /// Seeded random states over `bounds`, `state_count` of them
    pub fn random_states(&self, bounds: &RealVectorBounds) -> Vec<RealVectorState> {
        let mut fuzzer = ValidityFuzzer::new(FuzzerConfig {
            seed: self.config.seed,
            ..FuzzerConfig::default()
        });
        fuzzer.random_states(bounds, self.config.state_count)
    }

    /// Query `checker` from many threads over `states`
    pub fn run<C>(&self, checker: &C, states: &[StateOf<C::Space>]) -> StressResult
    where
        C: StateValidityChecker + ?Sized,
    {
        let capabilities_before = *checker.capabilities();
        let baseline: Vec<(bool, f64)> = states
            .iter()
            .map(|s| checker.is_valid_with_clearance(s))
            .collect();

        let mismatches = Mutex::new(Vec::new());
        let start = Instant::now();

        let queries: u64 = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..self.config.threads)
                .map(|thread| {
                    let baseline = &baseline;
                    let mismatches = &mismatches;
                    let iterations = self.config.iterations_per_thread;
                    scope.spawn(move || {
                        let mut queries = 0u64;
                        for _ in 0..iterations {
                            // Start each thread at a different offset to interleave
                            for k in 0..states.len() {
                                let index = (k + thread) % states.len();
                                let state = &states[index];
                                let actual = checker.is_valid_with_clearance(state);
                                let plain = checker.is_valid(state);
                                queries += 2;

                                let expected = baseline[index];
                                if !same_answer(actual, expected) || plain != expected.0 {
                                    mismatches.lock().push(StressMismatch {
                                        thread,
                                        state_index: index,
                                        expected,
                                        actual,
                                        plain,
                                    });
                                }
                            }
                        }
                        queries
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .sum()
        });

        let result = StressResult {
            queries,
            mismatches: mismatches.into_inner(),
            capabilities_before,
            capabilities_after: *checker.capabilities(),
            elapsed: start.elapsed(),
        };

        if result.is_consistent() {
            debug!(
                threads = self.config.threads,
                queries = result.queries,
                elapsed = ?result.elapsed,
                "stress run consistent"
            );
        } else {
            warn!(mismatches = result.mismatches.len(), "stress run inconsistent");
        }

        result
    }
}

fn same_answer(a: (bool, f64), b: (bool, f64)) -> bool {
    a.0 == b.0 && (a.1 == b.1 || (a.1.is_nan() && b.1.is_nan()))
}
