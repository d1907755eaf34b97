//! Sets of 32-bit integers with a braced-literal text format.
//!
//! An [`IntSet`] is parsed from literals such as `"{1,2,3}"` (spaces may
//! surround numbers; consecutive numbers must be separated by a comma),
//! held in canonical form (sorted, duplicate-free), and combined through a
//! complete boolean set algebra. Formatting always produces the canonical
//! literal, so any accepted text round-trips.
//!
//! # Examples
//!
//! ```
//! use intset::IntSet;
//!
//! let a: IntSet = "{ 3, 1, 2 }".parse().unwrap();
//! let b: IntSet = "{2,4}".parse().unwrap();
//!
//! assert_eq!(a.to_string(), "{1,2,3}");
//! assert_eq!((&a | &b).to_string(), "{1,2,3,4}");
//! assert_eq!((&a & &b).to_string(), "{2}");
//! assert_eq!((&a - &b).to_string(), "{1,3}");
//! assert_eq!((&a ^ &b).to_string(), "{1,3,4}");
//!
//! assert!("{1 2}".parse::<intset::IntSet>().is_err());
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod parser;
mod search;
mod set;
mod sort;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};
pub use set::IntSet;
