use crate::core::{ConfigProvider, DeclarationStyle};
use crate::core::render::guard_from_file_name;
use crate::utils::error::{HeaderError, Result};
use crate::utils::validation::{
    validate_file_name, validate_identifier, validate_non_empty, validate_path, validate_unique,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Batch manifest listing every shader to embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub shaders: Vec<ShaderEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    pub style: Option<DeclarationStyle>,
    pub include_guards: Option<bool>,
}

fn default_directory() -> String {
    ".".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            style: None,
            include_guards: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaderEntry {
    pub source: String,
    pub variable: String,
    pub header: Option<String>,
    pub style: Option<DeclarationStyle>,
}

impl ShaderEntry {
    pub fn header_name(&self) -> String {
        self.header
            .clone()
            .unwrap_or_else(|| format!("{}.h", self.variable))
    }
}

/// One resolved manifest entry, ready to drive a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderJob {
    pub source: String,
    pub variable: String,
    pub style: DeclarationStyle,
    pub include_guard: Option<String>,
    pub output: String,
}

impl ConfigProvider for ShaderJob {
    fn source_path(&self) -> &str {
        &self.source
    }

    fn variable_name(&self) -> &str {
        &self.variable
    }

    fn style(&self) -> DeclarationStyle {
        self.style
    }

    fn include_guard(&self) -> Option<&str> {
        self.include_guard.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        Some(&self.output)
    }
}

impl BatchConfig {
    /// Loads a manifest from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HeaderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a manifest, replacing `${VAR}` with environment values first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    // Unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn include_guards(&self) -> bool {
        self.output.include_guards.unwrap_or(true)
    }

    pub fn default_style(&self) -> DeclarationStyle {
        self.output.style.unwrap_or_default()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("output.directory", &self.output.directory)?;
        validate_non_empty("shaders", &self.shaders)?;

        for entry in &self.shaders {
            validate_path("shaders.source", &entry.source)?;
            validate_identifier("shaders.variable", &entry.variable)?;
            validate_file_name("shaders.header", &entry.header_name())?;
        }

        validate_unique(
            "shaders.variable",
            self.shaders.iter().map(|s| s.variable.as_str()),
        )?;

        let headers: Vec<String> = self.shaders.iter().map(ShaderEntry::header_name).collect();
        validate_unique("shaders.header", headers.iter().map(String::as_str))?;

        // Distinct file names can still collapse to one guard, e.g. `a-b.h` and `a_b.h`.
        if self.include_guards() {
            let guards: Vec<String> = headers.iter().map(|h| guard_from_file_name(h)).collect();
            validate_unique("shaders.header", guards.iter().map(String::as_str))?;
        }

        Ok(())
    }

    /// Resolves entries in manifest order.
    pub fn jobs(&self) -> Vec<ShaderJob> {
        self.shaders
            .iter()
            .map(|entry| {
                let header = entry.header_name();
                let include_guard = self
                    .include_guards()
                    .then(|| guard_from_file_name(&header));

                ShaderJob {
                    source: entry.source.clone(),
                    variable: entry.variable.clone(),
                    style: entry.style.unwrap_or_else(|| self.default_style()),
                    include_guard,
                    output: Path::new(&self.output.directory)
                        .join(&header)
                        .display()
                        .to_string(),
                }
            })
            .collect()
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
