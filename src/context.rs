// src/context.rs
// Read-only handles every stage needs. Cheap to copy, borrowed from the
// translator that owns the data.

use crate::{
    hyphenate::{DutchHyphenator, Hyphenate},
    tables::Tables,
};
use std::{fmt, sync::LazyLock};

static DEFAULT_HYPHENATOR: LazyLock<DutchHyphenator> = LazyLock::new(DutchHyphenator::default);

/// What to do when the hyphenation backend returns an invalid partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackendPolicy {
    /// Log a warning and treat the whole word as one syllable.
    #[default]
    Fallback,
    /// Fail the whole call.
    Fail,
}

/// Runtime context passed to every stage.
#[derive(Clone, Copy)]
pub struct Context<'h> {
    pub tables: &'h Tables,
    pub hyphenator: &'h dyn Hyphenate,
    pub policy: BackendPolicy,
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("contraction_groups", &self.tables.contractions().len())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Default for Context<'static> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(Tables::builtin_ref(), &*DEFAULT_HYPHENATOR)
    }
}

impl<'h> Context<'h> {
    #[inline(always)]
    pub fn new(tables: &'h Tables, hyphenator: &'h dyn Hyphenate) -> Self {
        Self {
            tables,
            hyphenator,
            policy: BackendPolicy::default(),
        }
    }

    #[inline(always)]
    pub fn with_policy(mut self, policy: BackendPolicy) -> Self {
        self.policy = policy;
        self
    }
}
