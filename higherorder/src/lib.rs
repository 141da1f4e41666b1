//! Generic higher-order functions over sequences.
//!
//! Sequences are borrowed as slices and never mutated; every operation that
//! produces a sequence allocates a fresh `Vec`. Caller-supplied closures are
//! invoked in index order unless documented otherwise.
//!
//! ```
//! use higherorder::{filter, map};
//!
//! let input = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let output = filter(|x| *x < 10, &map(|x| x * 2, &input));
//! assert_eq!(output, vec![2, 4, 6, 8]);
//! ```
//!
//! The same operations are available as methods through [`SequenceExt`]:
//!
//! ```
//! use higherorder::SequenceExt;
//!
//! let input = [3, 1, 2];
//! assert_eq!(input.sorted_by_less(|a, b| a < b).reversed(), vec![3, 2, 1]);
//! ```

mod combinator;
pub mod error;
mod ext;
mod hof;
mod sequence;

pub use combinator::{compose, composed, identity};
pub use error::{Error, Result};
pub use ext::SequenceExt;
pub use hof::{filter, foldl, foldr, map, sort};
pub use sequence::{all, any, first, reverse};
