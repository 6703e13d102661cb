use crate::config::manifest::ShaderJob;
use crate::core::engine::HeaderEngine;
use crate::core::pipeline::ShaderPipeline;
use crate::core::Storage;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub variable: String,
    pub output_path: String,
}

/// Runs manifest jobs one after another, stopping at the first failure.
pub struct BatchRunner<S: Storage> {
    storage: S,
    jobs: Vec<ShaderJob>,
}

impl<S: Storage> BatchRunner<S> {
    pub fn new(storage: S, jobs: Vec<ShaderJob>) -> Self {
        Self { storage, jobs }
    }

    pub fn jobs(&self) -> &[ShaderJob] {
        &self.jobs
    }

    pub fn run(&self) -> Result<Vec<BatchResult>> {
        let mut results = Vec::with_capacity(self.jobs.len());

        for (index, job) in self.jobs.iter().enumerate() {
            tracing::info!(
                "[{}/{}] {} -> {}",
                index + 1,
                self.jobs.len(),
                job.source,
                job.output
            );

            let engine = HeaderEngine::new(ShaderPipeline::new(&self.storage, job.clone()));
            let output_path = engine.run().inspect_err(|e| {
                tracing::error!("Failed to convert {}: {}", job.source, e);
            })?;

            results.push(BatchResult {
                variable: job.variable.clone(),
                output_path,
            });
        }

        Ok(results)
    }
}
