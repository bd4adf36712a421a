//! Auto-generated element names.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter shared by every element that is never given a name.
pub static NAME_COUNTER: NameCounter = NameCounter::new();

/// Monotonic counter used to synthesize element names.
///
/// Starts at zero and is incremented before every draw, so the first
/// generated name ends in `1`. It is never reset. Draws are atomic; two
/// elements racing for a name still get distinct suffixes.
#[derive(Debug, Default)]
pub struct NameCounter {
    next: AtomicU64,
}

impl NameCounter {
    /// Create a counter at zero.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Draw the next suffix.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Draw a name of the form `{type_name}{n}`.
    pub fn auto_name(&self, type_name: &str) -> String {
        format!("{}{}", type_name, self.next())
    }
}

/// Join path segments with `.`, skipping empty ones.
pub fn qualify<'a>(segments: impl IntoIterator<Item = Option<&'a str>>) -> String {
    segments
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
