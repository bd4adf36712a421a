//! Fuzzable Core Types
//!
//! This crate provides the foundational types shared by every fuzzable element:
//! - The semantic `Value` an element holds and renders
//! - `Mutation`, the per-test-case map of qualified names to replacement values
//! - `NameCounter`, the process-wide source of auto-generated element names
//! - Render error types

mod error;
pub mod messages;
mod mutation;
mod naming;
mod value;

pub use error::*;
pub use mutation::*;
pub use naming::*;
pub use value::*;
