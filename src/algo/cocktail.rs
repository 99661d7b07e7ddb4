use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    /// Next comparison is `(i, i+1)`, walking up to `end`.
    Forward { i: usize },
    /// Next comparison is `(k-1, k)`, walking down to `start`.
    Backward { k: usize },
    Done,
}

/// Cocktail shaker sort.
///
/// Alternates a forward pass over `start..end` and a backward pass, shrinking `end` after
/// every forward pass and growing `start` after every backward pass. Stops as soon as a
/// pass in either direction makes no swap.
#[derive(Debug)]
pub struct CocktailSteps<'a, T> {
    data: &'a mut [T],
    start: usize,
    end: usize,
    pass: Pass,
    swapped: bool,
    pending_swap: Option<usize>,
}

impl<'a, T: PartialOrd> CocktailSteps<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        let end = data.len().saturating_sub(1);
        Self {
            data,
            start: 0,
            end,
            pass: Pass::Forward { i: 0 },
            swapped: false,
            pending_swap: None,
        }
    }

    fn compare_at(&mut self, i: usize) -> Step {
        if self.data[i] > self.data[i + 1] {
            self.pending_swap = Some(i);
        }
        Step::compare(i, i + 1)
    }
}

impl<T: PartialOrd> Iterator for CocktailSteps<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(i) = self.pending_swap.take() {
            self.data.swap(i, i + 1);
            self.swapped = true;
            return Some(Step::swap(i, i + 1));
        }

        loop {
            match self.pass {
                Pass::Forward { i } if i < self.end => {
                    self.pass = Pass::Forward { i: i + 1 };
                    return Some(self.compare_at(i));
                }
                Pass::Forward { .. } => {
                    if !self.swapped {
                        self.pass = Pass::Done;
                        continue;
                    }
                    self.swapped = false;
                    self.end -= 1;
                    self.pass = Pass::Backward { k: self.end };
                }
                Pass::Backward { k } if k > self.start => {
                    self.pass = Pass::Backward { k: k - 1 };
                    return Some(self.compare_at(k - 1));
                }
                Pass::Backward { .. } => {
                    self.start += 1;
                    if !self.swapped {
                        self.pass = Pass::Done;
                        continue;
                    }
                    self.swapped = false;
                    self.pass = Pass::Forward { i: self.start };
                }
                Pass::Done => return None,
            }
        }
    }
}

impl<T: PartialOrd> FusedIterator for CocktailSteps<'_, T> {}

impl<T: PartialOrd> StepSequence<T> for CocktailSteps<'_, T> {
    fn array(&self) -> &[T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_directions() {
        let mut data = [2, 3, 1];
        let steps: Vec<Step> = CocktailSteps::new(&mut data).collect();

        assert_eq!(
            steps,
            vec![
                // forward over 0..2
                Step::compare(0, 1),
                Step::compare(1, 2),
                Step::swap(1, 2),
                // backward over 0..1
                Step::compare(0, 1),
                Step::swap(0, 1),
                // forward over 1..1 is empty and made no swap
            ]
        );
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_sorted_single_forward_pass() {
        let mut data = [1, 2, 3, 4];
        assert_eq!(CocktailSteps::new(&mut data).count(), 3);
    }
}
