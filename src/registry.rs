//! Name-to-sorter lookup.
//!
//! The eight algorithms form a closed set, so the registry is an enum rather than a map.
//! [`resolve`] never fails: unknown names fall back to bubble sort, which keeps a UI
//! with a fixed list of labels from ever crashing on a typo. Parsing through `FromStr` is
//! the strict counterpart for command-line input.

use crate::algo::{
    BubbleSteps, CocktailSteps, HeapSteps, InsertionSteps, MergeSteps, QuickSteps,
    SelectionSteps, ShellSteps, SortSteps,
};
use crate::error::Error;
use crate::stats::SortStats;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Builds a step sequence over a working array.
pub type Constructor<T> = for<'a> fn(&'a mut [T]) -> SortSteps<'a, T>;

/// One of the supported sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
    Cocktail,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Cocktail,
    ];

    /// Human-readable label, e.g. `"Quick Sort"`.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Cocktail => "Cocktail Sort",
        }
    }

    /// Returns the constructor for this algorithm's step sequence.
    pub fn constructor<T: PartialOrd + Clone>(self) -> Constructor<T> {
        match self {
            Algorithm::Bubble => |data| SortSteps::Bubble(BubbleSteps::new(data)),
            Algorithm::Selection => |data| SortSteps::Selection(SelectionSteps::new(data)),
            Algorithm::Insertion => |data| SortSteps::Insertion(InsertionSteps::new(data)),
            Algorithm::Merge => |data| SortSteps::Merge(MergeSteps::new(data)),
            Algorithm::Quick => |data| SortSteps::Quick(QuickSteps::new(data)),
            Algorithm::Heap => |data| SortSteps::Heap(HeapSteps::new(data)),
            Algorithm::Shell => |data| SortSteps::Shell(ShellSteps::new(data)),
            Algorithm::Cocktail => |data| SortSteps::Cocktail(CocktailSteps::new(data)),
        }
    }

    /// Builds a step sequence over `data`. Nothing is written until the first step is pulled.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortsteps::Algorithm;
    ///
    /// let mut data = vec![4, 3, 2, 1];
    /// let steps = Algorithm::Quick.steps(&mut data).count();
    ///
    /// assert!(steps > 0);
    /// assert_eq!(data, vec![1, 2, 3, 4]);
    /// ```
    pub fn steps<T: PartialOrd + Clone>(self, data: &mut [T]) -> SortSteps<'_, T> {
        (self.constructor())(data)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Strict lookup by exact, case-sensitive label.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name().to_string()
    }
}

/// Looks up an algorithm by label, falling back to [`Algorithm::Bubble`] for unknown names.
///
/// ```
/// use sortsteps::{resolve, Algorithm};
///
/// assert_eq!(resolve("Heap Sort"), Algorithm::Heap);
/// assert_eq!(resolve("heap sort"), Algorithm::Bubble);
/// ```
pub fn resolve(name: &str) -> Algorithm {
    name.parse().unwrap_or(Algorithm::Bubble)
}

/// Sorts `data` with `algorithm` by draining its step sequence and returns the totals.
///
/// ```
/// use sortsteps::{sort, Algorithm};
///
/// let mut data = [3, 1, 2];
/// let stats = sort(Algorithm::Bubble, &mut data);
///
/// assert_eq!(data, [1, 2, 3]);
/// assert_eq!(stats.comparisons, 5);
/// assert_eq!(stats.accesses, 14);
/// ```
pub fn sort<T: PartialOrd + Clone>(algorithm: Algorithm, data: &mut [T]) -> SortStats {
    algorithm.steps(data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_resolves_to_itself() {
        for algorithm in Algorithm::ALL {
            assert_eq!(resolve(algorithm.name()), algorithm);
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_unknown_falls_back_to_bubble() {
        assert_eq!(resolve("not a real algorithm"), resolve("Bubble Sort"));
        assert_eq!(resolve(""), Algorithm::Bubble);
        assert_eq!(resolve("QUICK SORT"), Algorithm::Bubble);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!(
            "Bogo Sort".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm("Bogo Sort".to_string()))
        );
    }

    #[test]
    fn test_fallback_constructor_is_bubble() {
        let fallback: Constructor<i32> = resolve("nope").constructor();
        let bubble: Constructor<i32> = Algorithm::Bubble.constructor();

        let mut a = [3, 1, 2];
        let mut b = [3, 1, 2];
        assert!(matches!(fallback(&mut a), SortSteps::Bubble(_)));
        assert!(fallback(&mut a).eq(bubble(&mut b)));
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Algorithm::Cocktail).unwrap();
        assert_eq!(json, "\"Cocktail Sort\"");
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::Cocktail);
    }
}
