//! Counters a driver keeps while consuming steps.

use crate::core::Step;
use serde::Serialize;

/// Running totals over consumed steps.
///
/// `comparisons` counts every step, mutating or not, which is how the visualizer labels
/// its step counter. `accesses` sums the per-step cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    pub comparisons: u64,
    pub accesses: u64,
    pub mutations: u64,
}

impl SortStats {
    #[inline]
    pub fn record(&mut self, step: &Step) {
        self.comparisons += 1;
        self.accesses += u64::from(step.cost);
        if step.mutated {
            self.mutations += 1;
        }
    }
}

impl Extend<Step> for SortStats {
    fn extend<I: IntoIterator<Item = Step>>(&mut self, iter: I) {
        iter.into_iter().for_each(|step| self.record(&step));
    }
}

impl<'s> Extend<&'s Step> for SortStats {
    fn extend<I: IntoIterator<Item = &'s Step>>(&mut self, iter: I) {
        iter.into_iter().for_each(|step| self.record(step));
    }
}

impl FromIterator<Step> for SortStats {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        let mut stats = SortStats::default();
        stats.extend(iter);
        stats
    }
}
