// src/pipeline.rs
use crate::{
    context::Context,
    stage::{Stage, StageError},
    token::Token,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn process<'a>(
        &self,
        tokens: Vec<Token<'a>>,
        ctx: &Context<'_>,
    ) -> Result<Vec<Token<'a>>, StageError> {
        let mut current = tokens;

        for stage in &self.stages {
            // Fast path: skip if nothing would change
            if !stage.needs_apply(&current, ctx)? {
                continue;
            }

            debug!(stage = stage.name(), tokens = current.len(), "applying stage");
            current = stage.apply(current, ctx)?;
        }

        Ok(current)
    }
}
