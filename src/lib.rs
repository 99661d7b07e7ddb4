//! # sortsteps
//!
//! `sortsteps` turns classic comparison sorts into step-by-step sequences that can be
//! animated or benchmarked.
//!
//! Each algorithm is an iterator over a mutable slice. Every comparison and every write is
//! reported as a [`Step`]: two array positions, a flag telling whether the array changed,
//! and an access cost for statistics. Draining the iterator leaves the slice sorted.
//!
//! ## Key Features
//!
//! - **Lazy**: Building a sequence touches nothing. Each pull runs the algorithm up to its
//!   next observable event and stops.
//! - **Observable**: Mutations are applied before their step is returned, so
//!   [`StepSequence::array`] always shows what a renderer should draw.
//! - **Flat**: Merge, quick and heap sort keep their recursion on explicit stacks, so step
//!   order never depends on the host call stack.
//! - **Closed registry**: [`Algorithm`] names the eight sorters; [`resolve`] maps UI labels
//!   to them and falls back to bubble sort for anything unknown.
//!
//! ## Usage
//!
//! ### Driving a visualization
//!
//! ```rust
//! use sortsteps::prelude::*;
//!
//! let mut bars = vec![5, 2, 4, 1, 3];
//! let mut steps = resolve("Insertion Sort").steps(&mut bars);
//! let mut stats = SortStats::default();
//!
//! while let Some(step) = steps.next() {
//!     stats.record(&step);
//!     if step.mutated {
//!         // Redraw bars `step.a` and `step.b` with their new heights.
//!         let _height = steps.array()[step.a];
//!     }
//! }
//!
//! assert_eq!(bars, vec![1, 2, 3, 4, 5]);
//! assert!(stats.accesses > stats.comparisons);
//! ```
//!
//! ### Benchmarking
//!
//! ```rust
//! use sortsteps::bench::{self, BenchConfig};
//! use sortsteps::Algorithm;
//!
//! let config = BenchConfig { max_size: 50, step_size: 20, seed: Some(1) };
//! let report = bench::run(&config, &[Algorithm::Merge, Algorithm::Shell]).unwrap();
//!
//! assert_eq!(report.sizes, vec![10, 30, 50]);
//! assert_eq!(report.series.len(), 2);
//! ```
//!
//! ## Cost model
//!
//! - Comparison of two elements: 2 accesses.
//! - Swap of two elements: 4 accesses.
//! - Single-element shift or placement: 1 access.

pub mod algo;
pub mod bench;
pub mod core;
pub mod error;
pub mod race;
pub mod registry;
pub mod stats;

pub use crate::algo::SortSteps;
pub use crate::core::{Step, StepSequence};
pub use crate::error::{Error, Result};
pub use crate::registry::{Algorithm, Constructor, resolve, sort};
pub use crate::stats::SortStats;

pub mod prelude {
    pub use crate::algo::SortSteps;
    pub use crate::core::{Step, StepSequence};
    pub use crate::registry::{Algorithm, resolve, sort};
    pub use crate::stats::SortStats;
}
