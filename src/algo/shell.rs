use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;
use std::mem;

#[derive(Debug)]
enum Phase<T> {
    Load,
    Probe { key: T },
    Shift { key: T },
    Place { key: T },
    Done,
}

/// Shell sort with the gap sequence `n/2, n/4, ..., 1`.
///
/// Each gap runs a gapped insertion sort: `(j, j-gap)` comparisons, `(j, j-gap)` shifts
/// and a final `(j, j)` placement of the held key.
#[derive(Debug)]
pub struct ShellSteps<'a, T> {
    data: &'a mut [T],
    gap: usize,
    next: usize,
    hole: usize,
    phase: Phase<T>,
}

impl<'a, T: PartialOrd + Clone> ShellSteps<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        let gap = data.len() / 2;
        Self {
            data,
            gap,
            next: gap,
            hole: 0,
            phase: if gap == 0 { Phase::Done } else { Phase::Load },
        }
    }
}

impl<T: PartialOrd + Clone> Iterator for ShellSteps<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            match mem::replace(&mut self.phase, Phase::Done) {
                Phase::Load => {
                    if self.next >= self.data.len() {
                        self.gap /= 2;
                        if self.gap == 0 {
                            return None;
                        }
                        self.next = self.gap;
                    }
                    self.hole = self.next;
                    self.phase = Phase::Probe {
                        key: self.data[self.next].clone(),
                    };
                }
                Phase::Probe { key } => {
                    if self.hole < self.gap {
                        self.phase = Phase::Place { key };
                        continue;
                    }
                    let j = self.hole;
                    self.phase = if self.data[j - self.gap] > key {
                        Phase::Shift { key }
                    } else {
                        Phase::Place { key }
                    };
                    return Some(Step::compare(j, j - self.gap));
                }
                Phase::Shift { key } => {
                    let (to, from) = (self.hole, self.hole - self.gap);
                    self.data[to] = self.data[from].clone();
                    self.hole = from;
                    self.phase = Phase::Probe { key };
                    return Some(Step::shift(to, from));
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

impl<T: PartialOrd + Clone> FusedIterator for ShellSteps<'_, T> {}

impl<T: PartialOrd + Clone> StepSequence<T> for ShellSteps<'_, T> {
    fn array(&self) -> &[T] {
        self.data
    }
}
