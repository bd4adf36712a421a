//! Fuzzable Element
//!
//! The protocol every fuzzable message element implements.
//!
//! Responsibilities:
//! - Name elements and resolve their qualified names within a hierarchy
//! - Enumerate mutation descriptors, lazily or through the legacy counter
//! - Render an element under a `Mutation`, pulling child data for encoding
//!
//! # Module Structure
//!
//! - `element` - Per-element naming and cursor state shared by all variants
//! - `fuzzable` - The `Fuzzable` trait, render pipeline and legacy state machine

mod element;
mod fuzzable;

pub use element::{Element, Mutations};
pub use fuzzable::Fuzzable;
