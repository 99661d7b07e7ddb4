use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SiftStage {
    Left,
    Right,
    Swap,
}

/// Sift-down of `node` inside a max-heap of `size` elements.
#[derive(Clone, Copy, Debug)]
struct Sift {
    node: usize,
    size: usize,
    largest: usize,
    stage: SiftStage,
}

impl Sift {
    fn new(node: usize, size: usize) -> Self {
        Self {
            node,
            size,
            largest: node,
            stage: SiftStage::Left,
        }
    }

    fn step<T: PartialOrd>(&mut self, data: &mut [T]) -> Option<Step> {
        loop {
            match self.stage {
                SiftStage::Left => {
                    self.stage = SiftStage::Right;
                    let l = 2 * self.node + 1;
                    if l < self.size {
                        if data[l] > data[self.largest] {
                            self.largest = l;
                        }
                        return Some(Step::compare(self.node, l));
                    }
                }
                SiftStage::Right => {
                    self.stage = SiftStage::Swap;
                    let r = 2 * self.node + 2;
                    if r < self.size {
                        let step = Step::compare(self.largest, r);
                        if data[r] > data[self.largest] {
                            self.largest = r;
                        }
                        return Some(step);
                    }
                }
                SiftStage::Swap => {
                    if self.largest == self.node {
                        return None;
                    }
                    let (node, child) = (self.node, self.largest);
                    data.swap(node, child);
                    *self = Sift::new(child, self.size);
                    return Some(Step::swap(node, child));
                }
            }
        }
    }
}

/// Heap sort: bottom-up max-heap construction followed by repeated root extraction.
#[derive(Debug)]
pub struct HeapSteps<'a, T> {
    data: &'a mut [T],
    /// Roots still to heapify during construction, counting down.
    build_roots: usize,
    /// Last index of the heap during extraction.
    end: usize,
    sift: Option<Sift>,
}

impl<'a, T: PartialOrd> HeapSteps<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        let n = data.len();
        Self {
            data,
            build_roots: n / 2,
            end: n.saturating_sub(1),
            sift: None,
        }
    }
}

impl<T: PartialOrd> Iterator for HeapSteps<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(sift) = self.sift.as_mut() {
                if let Some(step) = sift.step(self.data) {
                    return Some(step);
                }
                self.sift = None;
            }

            if self.build_roots > 0 {
                self.build_roots -= 1;
                self.sift = Some(Sift::new(self.build_roots, self.data.len()));
                continue;
            }

            if self.end == 0 {
                return None;
            }
            let end = self.end;
            self.data.swap(end, 0);
            self.sift = Some(Sift::new(0, end));
            self.end -= 1;
            return Some(Step::swap(end, 0));
        }
    }
}

impl<T: PartialOrd> FusedIterator for HeapSteps<'_, T> {}

impl<T: PartialOrd> StepSequence<T> for HeapSteps<'_, T> {
    fn array(&self) -> &[T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_elements() {
        let mut data = [1, 3, 2];
        let steps: Vec<Step> = HeapSteps::new(&mut data).collect();

        assert_eq!(
            steps,
            vec![
                // build: root 0
                Step::compare(0, 1),
                Step::compare(1, 2),
                Step::swap(0, 1),
                // extract 3
                Step::swap(2, 0),
                Step::compare(0, 1),
                // extract 2
                Step::swap(1, 0),
            ]
        );
        assert_eq!(data, [1, 2, 3]);
    }
}
