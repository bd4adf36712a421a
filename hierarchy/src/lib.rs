//! Fuzzable Hierarchy
//!
//! Assemble elements into a named tree and fuzz it as one message.
//!
//! Responsibilities:
//! - Attach children to containers, deriving their context paths
//! - Reject definitions that break the element contract before fuzzing starts
//! - Look up elements by qualified name
//! - Render the whole tree under a mutation, or step it with the legacy cursor
//!
//! # Module Structure
//!
//! - `block` - The `Block` container element
//! - `builder` - `HierarchyBuilder` and `BlockBuilder` for assembling a tree
//! - `hierarchy` - The immutable, validated `Hierarchy`
//! - `config` - Assembly options
//! - `error` - Definition error types

mod block;
mod builder;
mod config;
mod error;
mod hierarchy;

pub use block::Block;
pub use builder::{BlockBuilder, HierarchyBuilder};
pub use config::HierarchyConfig;
pub use error::{DefinitionError, DefinitionResult};
pub use hierarchy::Hierarchy;
