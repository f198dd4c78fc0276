//! Stage contracts and the sequential pipeline runner.

use crate::error::Result;
use polars::prelude::DataFrame;
use std::fmt;

/// Chain root: produces the initial Record Table from external storage.
pub trait Source {
    /// Load the initial table. Fails fast if the source is absent.
    fn load(&self) -> Result<DataFrame>;
}

/// One pipeline stage with a table-in/table-out contract.
///
/// A stage receives exclusive ownership of the table produced by its
/// predecessor and must return a table for its successor. Stages never
/// remove rows. Side effects (writing files, verbose output) are
/// permitted as long as a table is returned to keep the chain moving.
pub trait Stage {
    /// Short stage name used in progress output.
    fn name(&self) -> &'static str;

    /// Transform the table.
    fn process(&self, df: DataFrame) -> Result<DataFrame>;
}

/// Ordered, strictly sequential pipeline.
///
/// The chain is fixed at composition time: the source runs first, then
/// every stage in insertion order, each fully completing before the next
/// begins. There is no branching and no partial-failure recovery; the
/// first error aborts the whole run.
pub struct Pipeline {
    source: Box<dyn Source>,
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create a pipeline rooted at `source` with no stages attached.
    pub fn new(source: impl Source + 'static) -> Self {
        Self {
            source: Box::new(source),
            stages: Vec::new(),
        }
    }

    /// Append a stage to the end of the chain.
    #[must_use]
    pub fn then(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages after the source.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages attached.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run the pipeline to completion, returning the final table.
    pub fn run(&self) -> Result<DataFrame> {
        self.run_observed(|_, _| {})
    }

    /// Run the pipeline, invoking `observer` with the stage name and the
    /// intermediate table after each stage completes.
    pub fn run_observed(
        &self,
        mut observer: impl FnMut(&'static str, &DataFrame),
    ) -> Result<DataFrame> {
        let mut df = self.source.load()?;
        for stage in &self.stages {
            df = stage.process(df)?;
            observer(stage.name(), &df);
        }
        Ok(df)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
