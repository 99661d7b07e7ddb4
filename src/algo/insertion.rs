use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;
use std::mem;

#[derive(Debug)]
enum Phase<T> {
    /// Pick up `data[next]` as the key.
    Load,
    /// Compare the element left of the hole against the key.
    Probe { key: T },
    /// Move the element left of the hole one slot right.
    Shift { key: T },
    /// Drop the key into the hole.
    Place { key: T },
    Done,
}

/// Insertion sort.
///
/// The key is held outside the array while larger elements shift right, so between a
/// shift and the final placement the array contains the shifted element twice.
#[derive(Debug)]
pub struct InsertionSteps<'a, T> {
    data: &'a mut [T],
    next: usize,
    hole: usize,
    phase: Phase<T>,
}

impl<'a, T: PartialOrd + Clone> InsertionSteps<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            next: 1,
            hole: 0,
            phase: Phase::Load,
        }
    }
}

impl<T: PartialOrd + Clone> Iterator for InsertionSteps<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            match mem::replace(&mut self.phase, Phase::Done) {
                Phase::Load => {
                    if self.next >= self.data.len() {
                        return None;
                    }
                    self.hole = self.next;
                    self.phase = Phase::Probe {
                        key: self.data[self.next].clone(),
                    };
                }
                Phase::Probe { key } => {
                    if self.hole == 0 {
                        self.phase = Phase::Place { key };
                        continue;
                    }
                    let j = self.hole - 1;
                    self.phase = if self.data[j] > key {
                        Phase::Shift { key }
                    } else {
                        Phase::Place { key }
                    };
                    return Some(Step::compare(j, self.hole));
                }
                Phase::Shift { key } => {
                    let to = self.hole;
                    self.data[to] = self.data[to - 1].clone();
                    self.hole -= 1;
                    self.phase = Phase::Probe { key };
                    return Some(Step::shift(to, to - 1));
                }
                Phase::Place { key } => {
                    self.data[self.hole] = key;
                    self.next += 1;
                    self.phase = Phase::Load;
                    return Some(Step::place(self.hole));
                }
                Phase::Done => return None,
            }
        }
    }
}

impl<T: PartialOrd + Clone> FusedIterator for InsertionSteps<'_, T> {}

impl<T: PartialOrd + Clone> StepSequence<T> for InsertionSteps<'_, T> {
    fn array(&self) -> &[T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_then_place() {
        let mut data = [2, 3, 1];
        let mut steps = InsertionSteps::new(&mut data);

        // Key 3 stays where it is.
        assert_eq!(steps.next(), Some(Step::compare(0, 1)));
        assert_eq!(steps.next(), Some(Step::place(1)));

        // Key 1 walks to the front.
        assert_eq!(steps.next(), Some(Step::compare(1, 2)));
        assert_eq!(steps.next(), Some(Step::shift(2, 1)));
        assert_eq!(steps.array(), &[2, 3, 3]);
        assert_eq!(steps.next(), Some(Step::compare(0, 1)));
        assert_eq!(steps.next(), Some(Step::shift(1, 0)));
        assert_eq!(steps.next(), Some(Step::place(0)));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);

        assert_eq!(data, [1, 2, 3]);
    }
}
