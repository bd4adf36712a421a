//! Integration test support for the fuzzable element protocol.
//!
//! Provides a handful of concrete elements that exercise every part of the
//! protocol, and a prelude for the tests under `tests/`.
//!
//! ```ignore
//! use fuzzable_tests::prelude::*;
//!
//! let mut builder = HierarchyBuilder::new("request");
//! builder.add_block("header")
//!     .child(LengthPrefixed::new("len", 2, Static::new("body", b"hello")))
//!     .done()?;
//! let request = builder.build()?;
//! assert_eq!(request.render_original()?, b"\x00\x05hello");
//! ```


pub use fixed::Static;
pub use length::LengthPrefixed;
pub use word::Word;

/// Everything a protocol test needs in one import.
pub mod prelude {
    pub use crate::{LengthPrefixed, Static, Word};
    pub use fuzzable_core::{mutation, Mutation, RenderError, Value};
    pub use fuzzable_element::{Element, Fuzzable, Mutations};
    pub use fuzzable_hierarchy::{
        Block, DefinitionError, Hierarchy, HierarchyBuilder, HierarchyConfig,
    };
}
