//! Step-emitting sorting algorithms.
//!
//! Every sorter is an explicit state machine over a borrowed `&mut [T]`. Each call to
//! `next` runs the algorithm up to its next observable event and returns it as a
//! [`Step`]. Loop indices and recursion stacks that would otherwise live across a
//! suspension point are kept as fields, so merge and quick sort never recurse on the
//! host stack.
//!
//! | Sorter | Comparison | Mutation |
//! |---|---|---|
//! | [`BubbleSteps`] | `(j, j+1)` | swap `(j, j+1)` |
//! | [`SelectionSteps`] | `(min, j)` | swap `(i, min)`, or compare `(i, i)` |
//! | [`InsertionSteps`] | `(j, j+1)` | shift `(j+1, j)`, place `(j+1)` |
//! | [`MergeSteps`] | `(start+l, mid+r)` | place `(pos)` |
//! | [`QuickSteps`] | `(j, high)` | swap `(i, j)`, pivot swap `(p, high)` |
//! | [`HeapSteps`] | `(i, l)`, `(largest, r)` | swap `(i, largest)`, extraction `(end, 0)` |
//! | [`ShellSteps`] | `(j, j-gap)` | shift `(j, j-gap)`, place `(j)` |
//! | [`CocktailSteps`] | `(i, i+1)` | swap `(i, i+1)` |

mod bubble;
mod cocktail;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

pub use bubble::BubbleSteps;
pub use cocktail::CocktailSteps;
pub use heap::HeapSteps;
pub use insertion::InsertionSteps;
pub use merge::MergeSteps;
pub use quick::QuickSteps;
pub use selection::SelectionSteps;
pub use shell::ShellSteps;

use crate::core::{Step, StepSequence};
use std::iter::FusedIterator;

/// Any of the eight sorters behind one concrete type.
///
/// Returned by [`Algorithm::steps`](crate::registry::Algorithm::steps) so callers can pick
/// an algorithm at runtime without boxing.
#[derive(Debug)]
pub enum SortSteps<'a, T> {
    Bubble(BubbleSteps<'a, T>),
    Selection(SelectionSteps<'a, T>),
    Insertion(InsertionSteps<'a, T>),
    Merge(MergeSteps<'a, T>),
    Quick(QuickSteps<'a, T>),
    Heap(HeapSteps<'a, T>),
    Shell(ShellSteps<'a, T>),
    Cocktail(CocktailSteps<'a, T>),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            SortSteps::Bubble($inner) => $body,
            SortSteps::Selection($inner) => $body,
            SortSteps::Insertion($inner) => $body,
            SortSteps::Merge($inner) => $body,
            SortSteps::Quick($inner) => $body,
            SortSteps::Heap($inner) => $body,
            SortSteps::Shell($inner) => $body,
            SortSteps::Cocktail($inner) => $body,
        }
    };
}

impl<T: PartialOrd + Clone> Iterator for SortSteps<'_, T> {
    type Item = Step;

    #[inline]
    fn next(&mut self) -> Option<Step> {
        dispatch!(self, inner => inner.next())
    }
}

impl<T: PartialOrd + Clone> FusedIterator for SortSteps<'_, T> {}

impl<T: PartialOrd + Clone> StepSequence<T> for SortSteps<'_, T> {
    fn array(&self) -> &[T] {
        dispatch!(self, inner => inner.array())
    }
}
