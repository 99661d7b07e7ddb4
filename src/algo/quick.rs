use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;

/// Lomuto partition of `low..=high` around `data[high]`.
#[derive(Clone, Copy, Debug)]
struct Partition {
    low: usize,
    high: usize,
    /// Next slot for an element smaller than the pivot.
    store: usize,
    j: usize,
    pending_swap: bool,
}

impl Partition {
    fn new(low: usize, high: usize) -> Self {
        Self {
            low,
            high,
            store: low,
            j: low,
            pending_swap: false,
        }
    }
}

/// Quick sort with Lomuto partitioning and the last element of each range as pivot.
///
/// Ranges are inclusive `(low, high)` pairs kept on an explicit stack. Only ranges with at
/// least two elements are pushed, and the left range is always partitioned before the
/// right one.
#[derive(Debug)]
pub struct QuickSteps<'a, T> {
    data: &'a mut [T],
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
}

impl<'a, T: PartialOrd> QuickSteps<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        let ranges = if data.len() > 1 {
            vec![(0, data.len() - 1)]
        } else {
            Vec::new()
        };
        Self {
            data,
            ranges,
            active: None,
        }
    }

    /// Advances the active partition. Returns `None` once the pivot has been placed.
    fn partition_step(&mut self, p: &mut Partition) -> Option<Step> {
        if p.pending_swap {
            p.pending_swap = false;
            let (i, j) = (p.store, p.j);
            self.data.swap(i, j);
            p.store += 1;
            p.j += 1;
            return Some(Step::swap(i, j));
        }

        if p.j < p.high {
            let j = p.j;
            if self.data[j] < self.data[p.high] {
                p.pending_swap = true;
            } else {
                p.j += 1;
            }
            return Some(Step::compare(j, p.high));
        }

        None
    }

    /// Places the pivot of a finished partition and schedules both sides.
    fn finish(&mut self, p: Partition) -> Step {
        let pivot = p.store;
        self.data.swap(pivot, p.high);

        if pivot + 1 < p.high {
            self.ranges.push((pivot + 1, p.high));
        }
        if pivot > p.low + 1 {
            self.ranges.push((p.low, pivot - 1));
        }
        Step::swap(pivot, p.high)
    }
}

impl<T: PartialOrd> Iterator for QuickSteps<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(mut p) = self.active.take() {
            if let Some(step) = self.partition_step(&mut p) {
                self.active = Some(p);
                return Some(step);
            }
            return Some(self.finish(p));
        }

        let (low, high) = self.ranges.pop()?;
        let mut p = Partition::new(low, high);
        let step = self.partition_step(&mut p);
        match step {
            Some(step) => {
                self.active = Some(p);
                Some(step)
            }
            None => Some(self.finish(p)),
        }
    }
}

impl<T: PartialOrd> FusedIterator for QuickSteps<'_, T> {}

impl<T: PartialOrd> StepSequence<T> for QuickSteps<'_, T> {
    fn array(&self) -> &[T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_four() {
        let mut data = [4, 3, 2, 1];
        let mut steps = QuickSteps::new(&mut data);

        // Pivot 1 is smaller than everything, so it lands at the front.
        assert_eq!(steps.next(), Some(Step::compare(0, 3)));
        assert_eq!(steps.next(), Some(Step::compare(1, 3)));
        assert_eq!(steps.next(), Some(Step::compare(2, 3)));
        assert_eq!(steps.next(), Some(Step::swap(0, 3)));
        assert_eq!(steps.array(), &[1, 3, 2, 4]);

        let rest: Vec<Step> = steps.collect();
        assert!(rest.iter().all(|s| s.a >= 1 && s.b >= 1));
        assert_eq!(data, [1, 2, 3, 4]);
    }

    #[test]
    fn test_swap_with_self() {
        let mut data = [1, 2, 3];
        let steps: Vec<Step> = QuickSteps::new(&mut data).collect();

        assert_eq!(
            steps,
            vec![
                Step::compare(0, 2),
                Step::swap(0, 0),
                Step::compare(1, 2),
                Step::swap(1, 1),
                Step::swap(2, 2),
                Step::compare(0, 1),
                Step::swap(0, 0),
                Step::swap(1, 1),
            ]
        );
    }
}
