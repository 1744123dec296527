//! Beat pattern encoding and Euclidean rhythm generation
//!
//! This crate provides the pure functions behind the firmware lookup
//! tables: encoding textual 16-step beat patterns into bitmasks, and
//! generating maximally even Euclidean rhythms for every (onsets, steps)
//! combination up to 32 steps.
//!
//! # Examples
//!
//! ```
//! use rhythm_core::{euclidean_bitmask, pattern_to_bits};
//!
//! // A four-on-the-floor arpeggiator pattern
//! let bits = pattern_to_bits("o--- o--- o--- o---").unwrap();
//! assert_eq!(bits.count_ones(), 4);
//!
//! // The tresillo: 3 onsets over 8 steps
//! assert_eq!(euclidean_bitmask(3, 8), 0b0010_1001);
//! ```

pub mod euclid;
pub mod pattern;

pub use euclid::{euclidean_bitmask, euclidean_pattern, euclidean_table, MAX_STEPS};
pub use pattern::{arpeggiator_table, pattern_to_bits, PatternError, ARPEGGIATOR_PATTERNS};
