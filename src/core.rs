//! Core types shared by every sorter.
//!
//! This module defines:
//! - [`Step`]: One observable unit of sort progress (two indices, a mutation flag and an access cost).
//! - [`StepSequence`]: The trait every step-emitting sorter implements.

use std::iter::FusedIterator;

/// Access cost of reading two elements to compare them.
pub const COMPARE_COST: u32 = 2;

/// Access cost of swapping two elements (two reads plus two writes).
pub const SWAP_COST: u32 = 4;

/// Access cost of a single element write (shift or placement).
pub const WRITE_COST: u32 = 1;

/// A single step emitted while sorting.
///
/// `a` and `b` are positions in the working array. When they are equal the step
/// describes a single-position event (a placement) rather than a comparison.
///
/// If `mutated` is `true`, the array already holds the post-mutation values at both
/// positions when the step is handed out, so a consumer can read them directly.
///
/// `cost` is the number of elementary array accesses attributed to the step. It exists
/// for statistics only; no algorithm branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    pub a: usize,
    pub b: usize,
    pub mutated: bool,
    pub cost: u32,
}

impl Step {
    /// Read-only comparison of the elements at `a` and `b`.
    #[inline]
    pub const fn compare(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            mutated: false,
            cost: COMPARE_COST,
        }
    }

    /// Exchange of the elements at `a` and `b`.
    #[inline]
    pub const fn swap(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            mutated: true,
            cost: SWAP_COST,
        }
    }

    /// Copy of the element at `from` into `to`.
    #[inline]
    pub const fn shift(to: usize, from: usize) -> Self {
        Self {
            a: to,
            b: from,
            mutated: true,
            cost: WRITE_COST,
        }
    }

    /// Write of a held value into position `i`.
    #[inline]
    pub const fn place(i: usize) -> Self {
        Self {
            a: i,
            b: i,
            mutated: true,
            cost: WRITE_COST,
        }
    }

    /// Returns `true` if the step refers to one position only.
    #[inline]
    pub const fn is_single(&self) -> bool {
        self.a == self.b
    }
}

/// A lazy, finite and non-restartable sequence of [`Step`]s that sorts its array in place.
///
/// The sequence holds the only mutable borrow of the array for its whole lifetime.
/// Use [`array`](StepSequence::array) to look at the current contents between pulls.
///
/// Nothing is written to the array before the first call to `next`. Once `next` has
/// returned `None` the array is sorted and every further call returns `None` again.
///
/// # Examples
///
/// ```
/// use sortsteps::algo::BubbleSteps;
/// use sortsteps::core::StepSequence;
///
/// let mut data = [3, 1, 2];
/// let mut steps = BubbleSteps::new(&mut data);
///
/// let first = steps.next().unwrap();
/// assert_eq!((first.a, first.b, first.mutated), (0, 1, false));
///
/// let swap = steps.next().unwrap();
/// assert!(swap.mutated);
/// assert_eq!(steps.array(), &[1, 3, 2]);
///
/// steps.for_each(drop);
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub trait StepSequence<T>: Iterator<Item = Step> + FusedIterator {
    /// Returns the current state of the working array.
    fn array(&self) -> &[T];

    /// Pulls every remaining step, discarding them, and returns how many there were.
    fn drain_count(&mut self) -> u64 {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }
}
