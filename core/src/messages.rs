//! Common messages used across the fuzzable crates.
//!
//! These constants keep error text and log messages consistent between the
//! element and hierarchy crates.

/// Expected-type description for elements that only accept byte-like values.
pub const EXPECTED_BYTES: &str = "Bytes, String or Null";

/// Expected-type description for integer elements.
pub const EXPECTED_INT: &str = "Int";

/// Log message: an element was addressed by the current mutation.
pub const MSG_ELEMENT_ADDRESSED: &str = "rendering replacement value";

/// Log message: the legacy cursor has no mutations left.
pub const MSG_MUTATIONS_EXHAUSTED: &str = "mutations exhausted";
