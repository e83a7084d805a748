//! Token-stream stage abstraction.
//!
//! A translation is a fixed sequence of stages over the token vector. Each
//! stage gets a cheap `needs_apply` pre-check so the pipeline can skip work,
//! and an `apply` that consumes the tokens and returns the new sequence.
//! Tokens are never mutated in place; a stage that changes a token builds a
//! new one.

pub mod contract;
pub mod transliterate;

use crate::{context::Context, token::Token};
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("translation failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single translation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage and
    /// promises that `apply` would have changed nothing.
    fn needs_apply(&self, tokens: &[Token<'_>], ctx: &Context<'_>) -> Result<bool, StageError>;

    fn apply<'a>(
        &self,
        tokens: Vec<Token<'a>>,
        ctx: &Context<'_>,
    ) -> Result<Vec<Token<'a>>, StageError>;
}
