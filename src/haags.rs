use thiserror::Error;

use crate::{
    context::{BackendPolicy, Context},
    hyphenate::{DutchHyphenator, Hyphenate},
    pipeline::Pipeline,
    stage::{Stage, StageError, contract::Contract, transliterate::Transliterate},
    tables::{TableError, Tables, TablesBuilder},
    token::{Token, join_tokens, tokenize},
};
use std::sync::Arc;

#[derive(Debug, Error)]
pub enum HaagsError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("table error: {0}")]
    Table(#[from] TableError),
}

/// Dutch → Haags translator: tokenizer, contraction resolver and word
/// transliteration over shared read-only tables.
pub struct Haags {
    tables: Arc<Tables>,
    hyphenator: Arc<dyn Hyphenate>,
    policy: BackendPolicy,
    pipeline: Pipeline,
}

impl Default for Haags {
    fn default() -> Self {
        Self::assemble(
            Tables::builtin(),
            Arc::new(DutchHyphenator::default()),
            BackendPolicy::default(),
            Vec::new(),
        )
    }
}

impl Haags {
    pub fn builder() -> HaagsBuilder {
        HaagsBuilder::default()
    }

    fn assemble(
        tables: Arc<Tables>,
        hyphenator: Arc<dyn Hyphenate>,
        policy: BackendPolicy,
        extra: Vec<Arc<dyn Stage>>,
    ) -> Self {
        let mut stages: Vec<Arc<dyn Stage>> = vec![Arc::new(Contract), Arc::new(Transliterate)];
        stages.extend(extra);
        Self {
            tables,
            hyphenator,
            policy,
            pipeline: Pipeline::new(stages),
        }
    }

    pub fn context(&self) -> Context<'_> {
        Context::new(&self.tables, &*self.hyphenator).with_policy(self.policy)
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Run the pipeline and return the final token sequence.
    pub fn tokens<'a>(&self, text: &'a str) -> Result<Vec<Token<'a>>, HaagsError> {
        let tokens = self.pipeline.process(tokenize(text).collect(), &self.context())?;
        Ok(tokens)
    }

    pub fn translate(&self, text: &str) -> Result<String, HaagsError> {
        let tokens = self.tokens(text)?;
        Ok(join_tokens(&tokens))
    }
}

#[derive(Default)]
pub struct HaagsBuilder {
    tables: Option<TablesBuilder>,
    hyphenator: Option<Arc<dyn Hyphenate>>,
    policy: BackendPolicy,
    stages: Vec<Arc<dyn Stage>>,
}

impl HaagsBuilder {
    /// Use these tables instead of the built-in ones. Start the builder from
    /// [`TablesBuilder::with_builtin`] to extend rather than replace.
    pub fn tables(mut self, tables: TablesBuilder) -> Self {
        self.tables = Some(tables);
        self
    }

    pub fn hyphenator<H: Hyphenate + 'static>(mut self, hyphenator: H) -> Self {
        self.hyphenator = Some(Arc::new(hyphenator));
        self
    }

    pub fn policy(mut self, policy: BackendPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `.policy(BackendPolicy::Fail)`.
    pub fn strict(self) -> Self {
        self.policy(BackendPolicy::Fail)
    }

    /// Append a stage after the built-in ones.
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Result<Haags, HaagsError> {
        let tables = match self.tables {
            Some(builder) => Arc::new(builder.build()?),
            None => Tables::builtin(),
        };
        let hyphenator: Arc<dyn Hyphenate> = match self.hyphenator {
            Some(hyphenator) => hyphenator,
            None => Arc::new(DutchHyphenator::default()),
        };
        Ok(Haags::assemble(tables, hyphenator, self.policy, self.stages))
    }
}
