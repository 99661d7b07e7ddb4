use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Sort { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
}

/// An in-progress merge of `start..mid` and `mid..end`.
///
/// Both runs are copied up front and written back over the original range.
#[derive(Debug)]
struct Merger<T> {
    left: Vec<T>,
    right: Vec<T>,
    start: usize,
    mid: usize,
    li: usize,
    ri: usize,
    pos: usize,
    /// Set by a comparison: `Some(true)` takes from the left run on the next pull.
    pending: Option<bool>,
}

impl<T: PartialOrd + Clone> Merger<T> {
    fn new(data: &[T], start: usize, mid: usize, end: usize) -> Self {
        Self {
            left: data[start..mid].to_vec(),
            right: data[mid..end].to_vec(),
            start,
            mid,
            li: 0,
            ri: 0,
            pos: start,
            pending: None,
        }
    }

    fn step(&mut self, data: &mut [T]) -> Option<Step> {
        let from_left = match self.pending.take() {
            Some(from_left) => from_left,
            None if self.li < self.left.len() && self.ri < self.right.len() => {
                self.pending = Some(self.left[self.li] <= self.right[self.ri]);
                return Some(Step::compare(self.start + self.li, self.mid + self.ri));
            }
            None if self.li < self.left.len() => true,
            None if self.ri < self.right.len() => false,
            None => return None,
        };

        if from_left {
            data[self.pos] = self.left[self.li].clone();
            self.li += 1;
        } else {
            data[self.pos] = self.right[self.ri].clone();
            self.ri += 1;
        }
        let step = Step::place(self.pos);
        self.pos += 1;
        Some(step)
    }
}

/// Top-down merge sort, split at the midpoint.
///
/// Recursion is replaced by a stack of pending tasks. A `Sort` task pushes its merge
/// and then both halves so that the left half is fully handled first.
#[derive(Debug)]
pub struct MergeSteps<'a, T> {
    data: &'a mut [T],
    tasks: Vec<Task>,
    active: Option<Merger<T>>,
}

impl<'a, T: PartialOrd + Clone> MergeSteps<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        let tasks = vec![Task::Sort {
            start: 0,
            end: data.len(),
        }];
        Self {
            data,
            tasks,
            active: None,
        }
    }
}

impl<T: PartialOrd + Clone> Iterator for MergeSteps<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(merger) = self.active.as_mut() {
                if let Some(step) = merger.step(self.data) {
                    return Some(step);
                }
                self.active = None;
            }

            match self.tasks.pop()? {
                Task::Sort { start, end } => {
                    if end - start > 1 {
                        let mid = (start + end) / 2;
                        self.tasks.push(Task::Merge { start, mid, end });
                        self.tasks.push(Task::Sort { start: mid, end });
                        self.tasks.push(Task::Sort { start, end: mid });
                    }
                }
                Task::Merge { start, mid, end } => {
                    self.active = Some(Merger::new(self.data, start, mid, end));
                }
            }
        }
    }
}

impl<T: PartialOrd + Clone> FusedIterator for MergeSteps<'_, T> {}

impl<T: PartialOrd + Clone> StepSequence<T> for MergeSteps<'_, T> {
    fn array(&self) -> &[T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_pair_then_drain() {
        let mut data = [2, 1, 3];
        let steps: Vec<Step> = MergeSteps::new(&mut data).collect();

        assert_eq!(
            steps,
            vec![
                // [1] + [3]
                Step::compare(1, 2),
                Step::place(1),
                Step::place(2),
                // [2] + [1, 3]
                Step::compare(0, 1),
                Step::place(0),
                Step::compare(0, 2),
                Step::place(1),
                Step::place(2),
            ]
        );
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_duplicates_kept() {
        let mut data = [2, 2, 1, 2, 1];
        MergeSteps::new(&mut data).for_each(drop);
        assert_eq!(data, [1, 1, 2, 2, 2]);
    }
}
