//! Configuration for hierarchy assembly

/// Options checked when a hierarchy is built.
#[derive(Debug, Clone)]
pub struct HierarchyConfig {
    /// Drain every element's mutations and compare against `num_mutations`
    pub verify_mutation_counts: bool,
    /// Accept two elements with the same qualified name
    pub allow_duplicate_names: bool,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            verify_mutation_counts: true,
            allow_duplicate_names: false,
        }
    }
}

impl HierarchyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verify_mutation_counts(mut self, verify: bool) -> Self {
        self.verify_mutation_counts = verify;
        self
    }

    pub fn with_allow_duplicate_names(mut self, allow: bool) -> Self {
        self.allow_duplicate_names = allow;
        self
    }

    /// Skip every optional check. Useful for very large mutation spaces.
    pub fn lenient() -> Self {
        Self {
            verify_mutation_counts: false,
            allow_duplicate_names: true,
        }
    }
}
