use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;

/// Bubble sort with early exit once a full pass makes no swap.
///
/// Emits `(j, j+1)` comparisons and `(j, j+1)` swaps.
#[derive(Debug)]
pub struct BubbleSteps<'a, T> {
    data: &'a mut [T],
    pass: usize,
    j: usize,
    swapped: bool,
    pending_swap: Option<usize>,
    done: bool,
}

impl<'a, T: PartialOrd> BubbleSteps<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            pass: 0,
            j: 0,
            swapped: false,
            pending_swap: None,
            done: false,
        }
    }
}

impl<T: PartialOrd> Iterator for BubbleSteps<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(j) = self.pending_swap.take() {
            self.data.swap(j, j + 1);
            self.swapped = true;
            return Some(Step::swap(j, j + 1));
        }

        let n = self.data.len();
        while !self.done {
            if self.pass >= n {
                self.done = true;
                break;
            }

            let j = self.j;
            if j + 1 < n - self.pass {
                self.j += 1;
                if self.data[j] > self.data[j + 1] {
                    self.pending_swap = Some(j);
                }
                return Some(Step::compare(j, j + 1));
            }

            // End of pass.
            if !self.swapped {
                self.done = true;
                break;
            }
            self.pass += 1;
            self.j = 0;
            self.swapped = false;
        }
        None
    }
}

impl<T: PartialOrd> FusedIterator for BubbleSteps<'_, T> {}

impl<T: PartialOrd> StepSequence<T> for BubbleSteps<'_, T> {
    fn array(&self) -> &[T] {
        self.data
    }
}
