//! The `Fuzzable` trait.
//!
//! Variants supply their original value, mutation strategy, size and
//! representation. Everything else (naming, the render pipeline and the
//! legacy mutate/render/reset cursor) is provided on top of those.

use crate::{Element, Mutations};
use fuzzable_core::messages::{MSG_ELEMENT_ADDRESSED, MSG_MUTATIONS_EXHAUSTED};
use fuzzable_core::{Mutation, RenderError, RenderResult, Value};
use std::fmt;
use tracing::trace;

/// A fuzzable message element or message.
///
/// `mutations` and `num_mutations` must agree: the iterator yields exactly
/// `num_mutations()` descriptors. Non-fuzzable elements yield none; for
/// containers this silences every descendant as well.
pub trait Fuzzable: fmt::Debug + fmt::Display {
    /// Shared naming and cursor state.
    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    /// Original, non-mutated value of the element.
    fn original_value(&self) -> Value;

    /// Mutation descriptors, each addressed by qualified name.
    ///
    /// Single pass; call again to re-enumerate.
    fn mutations(&self) -> Mutations<'_>;

    /// Total number of mutations this element yields.
    fn num_mutations(&self) -> usize;

    /// Rendered size of the element at its current mutant index.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte length of `render()`, or None if rendering fails or the result
    /// has no byte form. Variants whose size depends on the active mutation
    /// build `len` on this.
    fn rendered_len(&self) -> Option<usize> {
        let rendered = self.render().ok()?;
        rendered.to_bytes().map(|bytes| bytes.len())
    }

    // ==================== Naming ====================

    fn name(&self) -> &str {
        self.element().name()
    }

    /// If false, this element is not mutated in normal fuzzing.
    fn fuzzable(&self) -> bool {
        self.element().fuzzable()
    }

    fn context_path(&self) -> Option<&str> {
        self.element().context_path()
    }

    /// Attach under a containing path. Containers override this to carry the
    /// new path down to their children.
    fn set_context_path(&mut self, context_path: Option<String>) {
        self.element_mut().set_context_path(context_path);
    }

    fn qualified_name(&self) -> String {
        self.element().qualified_name()
    }

    /// Direct children, empty for primitives.
    fn children(&self) -> &[Box<dyn Fuzzable>] {
        &[]
    }

    // ==================== Render pipeline ====================

    /// Turn a semantic value into its rendered form. Identity by default.
    fn encode(&self, value: Value, _child_data: Option<&Value>) -> RenderResult<Value> {
        Ok(value)
    }

    /// Data from rendered children that `encode` depends on. None by default.
    fn get_child_data(&self, _mutation: &Mutation) -> RenderResult<Option<Value>> {
        Ok(None)
    }

    /// Render after applying the mutation, if it addresses this element.
    fn render_mutated(&self, mutation: &Mutation) -> RenderResult<Value> {
        let qualified_name = self.qualified_name();
        let child_data = self.get_child_data(mutation)?;
        match mutation.get(&qualified_name) {
            Some(value) => {
                trace!(element = %qualified_name, value = %value, "{}", MSG_ELEMENT_ADDRESSED);
                self.encode(value.clone(), child_data.as_ref())
            }
            None => self.encode(self.original_value(), child_data.as_ref()),
        }
    }

    // ==================== Legacy stateful interface ====================

    /// 0 renders the original value, 1 the first mutation.
    fn mutant_index(&self) -> usize {
        self.element().mutant_index()
    }

    /// Step to the next mutation. Returns false once all are used up.
    ///
    /// Call `reset` afterwards to return to the original value.
    fn mutate(&mut self) -> bool {
        let limit = self.num_mutations();
        let advanced = self.element_mut().advance(limit);
        if advanced {
            trace!(element = %self.qualified_name(), index = self.mutant_index(), "mutated");
        } else {
            trace!(element = %self.qualified_name(), "{}", MSG_MUTATIONS_EXHAUSTED);
        }
        advanced
    }

    /// Render the value selected by the mutant index.
    ///
    /// Fails if the index points past the descriptors `mutations` yields,
    /// which only happens when `num_mutations` overstates them.
    fn render(&self) -> RenderResult<Value> {
        let mutation = match self.mutant_index() {
            0 => Mutation::new(),
            index => self
                .mutations()
                .nth(index - 1)
                .ok_or_else(|| RenderError::missing_mutation(self.qualified_name(), index))?,
        };
        self.render_mutated(&mutation)
    }

    /// Return to the original value. Safe to call in any state.
    fn reset(&mut self) {
        self.element_mut().reset();
    }
}
