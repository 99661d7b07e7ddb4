//! Pull-based driving of one or two step sequences.
//!
//! A [`Lane`] pairs a sequence with its counters and pulls a batch of steps per tick. A
//! [`Race`] ticks two lanes over separate arrays in lockstep. Neither knows about time:
//! the caller decides how often to tick and how many steps make a batch.

use crate::algo::SortSteps;
use crate::core::{Step, StepSequence};
use crate::registry::Algorithm;
use crate::stats::SortStats;
use tracing::debug;

/// A sequence being consumed in batches.
#[derive(Debug)]
pub struct Lane<'a, T> {
    algorithm: Algorithm,
    steps: SortSteps<'a, T>,
    stats: SortStats,
    finished: bool,
}

impl<'a, T: PartialOrd + Clone> Lane<'a, T> {
    pub fn new(algorithm: Algorithm, data: &'a mut [T]) -> Self {
        Self {
            algorithm,
            steps: algorithm.steps(data),
            stats: SortStats::default(),
            finished: false,
        }
    }

    /// Pulls up to `batch` steps (at least one) and returns them.
    ///
    /// Returns an empty vector once the sequence is exhausted.
    pub fn tick(&mut self, batch: usize) -> Vec<Step> {
        let mut pulled = Vec::with_capacity(batch.max(1));
        while pulled.len() < batch.max(1) {
            match self.steps.next() {
                Some(step) => {
                    self.stats.record(&step);
                    pulled.push(step);
                }
                None => {
                    if !self.finished {
                        debug!(
                            algorithm = %self.algorithm,
                            comparisons = self.stats.comparisons,
                            accesses = self.stats.accesses,
                            "lane finished"
                        );
                    }
                    self.finished = true;
                    break;
                }
            }
        }
        pulled
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Current contents of the lane's array.
    pub fn array(&self) -> &[T] {
        self.steps.array()
    }
}

/// Which side of a [`Race`] finished first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Left,
    Right,
    Tie,
}

/// Two lanes ticked together.
#[derive(Debug)]
pub struct Race<'a, T> {
    pub left: Lane<'a, T>,
    pub right: Lane<'a, T>,
    ticks: u64,
    left_done_at: Option<u64>,
    right_done_at: Option<u64>,
}

impl<'a, T: PartialOrd + Clone> Race<'a, T> {
    pub fn new(left: Lane<'a, T>, right: Lane<'a, T>) -> Self {
        Self {
            left,
            right,
            ticks: 0,
            left_done_at: None,
            right_done_at: None,
        }
    }

    /// Advances both lanes by one batch. Returns `true` while either lane is still running.
    pub fn tick(&mut self, batch: usize) -> bool {
        self.ticks += 1;
        if !self.left.finished() {
            self.left.tick(batch);
            if self.left.finished() {
                self.left_done_at = Some(self.ticks);
            }
        }
        if !self.right.finished() {
            self.right.tick(batch);
            if self.right.finished() {
                self.right_done_at = Some(self.ticks);
            }
        }
        !(self.left.finished() && self.right.finished())
    }

    /// Ticks until both lanes are done.
    pub fn run(&mut self, batch: usize) -> Winner {
        while self.tick(batch) {}
        self.winner().unwrap_or(Winner::Tie)
    }

    /// The lane that finished on an earlier tick, or `None` while both are running.
    ///
    /// A lane that finishes on the same tick as the other wins only if it needed fewer steps.
    pub fn winner(&self) -> Option<Winner> {
        match (self.left_done_at, self.right_done_at) {
            (None, None) => None,
            (Some(_), None) => Some(Winner::Left),
            (None, Some(_)) => Some(Winner::Right),
            (Some(l), Some(r)) if l < r => Some(Winner::Left),
            (Some(l), Some(r)) if r < l => Some(Winner::Right),
            _ => {
                let (l, r) = (self.left.stats().comparisons, self.right.stats().comparisons);
                Some(match l.cmp(&r) {
                    std::cmp::Ordering::Less => Winner::Left,
                    std::cmp::Ordering::Greater => Winner::Right,
                    std::cmp::Ordering::Equal => Winner::Tie,
                })
            }
        }
    }
}
