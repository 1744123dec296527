//! Lookup table generation for the arpeggiator firmware build
//!
//! Builds the constant rhythm tables (arpeggiator beat patterns and
//! Euclidean rhythms, from the `rhythm-core` crate) and renders them in a
//! consumer-ready form: a C header, Rust source, or JSON.

pub mod emit;
pub mod tables;

// Re-export main types for convenience
pub use tables::{build_lookup_tables, BitWidth, LookupTable};
