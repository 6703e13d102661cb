use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct HeaderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> HeaderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::debug!("Reading shader source...");
        let source = self.pipeline.extract()?;
        tracing::debug!("Read {} lines from {}", source.lines.len(), source.path);

        let output = self.pipeline.transform(source)?;
        tracing::debug!(
            "Rendered {} literal lines for {}",
            output.line_count,
            output.variable
        );

        let destination = self.pipeline.load(output)?;
        tracing::info!("Header written to {}", destination);

        Ok(destination)
    }
}
