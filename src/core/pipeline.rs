use crate::core::escape::split_lines;
use crate::core::render::render_header;
use crate::core::{ConfigProvider, HeaderOutput, HeaderSpec, Pipeline, ShaderSource, Storage};
use crate::utils::error::{HeaderError, Result};
use std::io::Write;

pub const STDOUT_LABEL: &str = "<stdout>";

pub struct ShaderPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ShaderPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn header_spec(&self) -> HeaderSpec {
        HeaderSpec {
            variable: self.config.variable_name().to_string(),
            style: self.config.style(),
            include_guard: self.config.include_guard().map(str::to_string),
        }
    }

    fn write_stdout(text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| HeaderError::OutputWriteError {
                path: STDOUT_LABEL.to_string(),
                source,
            })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ShaderPipeline<S, C> {
    fn extract(&self) -> Result<ShaderSource> {
        let path = self.config.source_path();
        let data = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path);

        Ok(ShaderSource {
            path: path.to_string(),
            lines: split_lines(&data),
        })
    }

    fn transform(&self, source: ShaderSource) -> Result<HeaderOutput> {
        let spec = self.header_spec();
        let text = render_header(&spec, &source.lines);

        Ok(HeaderOutput {
            variable: spec.variable,
            line_count: source.lines.len(),
            text,
        })
    }

    fn load(&self, output: HeaderOutput) -> Result<String> {
        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, output.text.as_bytes())?;
                Ok(path.to_string())
            }
            None => {
                Self::write_stdout(&output.text)?;
                Ok(STDOUT_LABEL.to_string())
            }
        }
    }
}
