use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;

/// Selection sort.
///
/// Every outer iteration ends with one extra step: a swap `(i, min)` when the minimum
/// was found elsewhere, or a self-comparison `(i, i)` when it is already in place. That
/// closing step keeps the access counters identical to the classic visualizer.
#[derive(Debug)]
pub struct SelectionSteps<'a, T> {
    data: &'a mut [T],
    i: usize,
    j: usize,
    min: usize,
}

impl<'a, T: PartialOrd> SelectionSteps<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        // Singletons are already sorted; skip the closing self-comparison.
        let i = if data.len() < 2 { data.len() } else { 0 };
        Self {
            data,
            i,
            j: i + 1,
            min: i,
        }
    }
}

impl<T: PartialOrd> Iterator for SelectionSteps<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.data.len();
        if self.i >= n {
            return None;
        }

        if self.j < n {
            let step = Step::compare(self.min, self.j);
            if self.data[self.j] < self.data[self.min] {
                self.min = self.j;
            }
            self.j += 1;
            return Some(step);
        }

        let (i, min) = (self.i, self.min);
        let step = if min != i {
            self.data.swap(i, min);
            Step::swap(i, min)
        } else {
            Step::compare(i, min)
        };

        self.i += 1;
        self.min = self.i;
        self.j = self.i + 1;
        Some(step)
    }
}

impl<T: PartialOrd> FusedIterator for SelectionSteps<'_, T> {}

impl<T: PartialOrd> StepSequence<T> for SelectionSteps<'_, T> {
    fn array(&self) -> &[T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_step_per_iteration() {
        let mut data = [2, 1, 3];
        let steps: Vec<Step> = SelectionSteps::new(&mut data).collect();

        assert_eq!(
            steps,
            vec![
                Step::compare(0, 1),
                Step::compare(1, 2),
                Step::swap(0, 1),
                Step::compare(1, 2),
                Step::compare(1, 1),
                Step::compare(2, 2),
            ]
        );
        assert_eq!(data, [1, 2, 3]);
    }
}
