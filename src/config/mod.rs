pub mod cli;
pub mod manifest;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, DeclarationStyle};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_identifier, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{error::ErrorKind, Parser};
#[cfg(feature = "cli")]
use std::ffi::OsString;

pub const USAGE: &str = "usage: glsl2h <GLSL source> <variable name>";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "glsl2h", version)]
#[command(about = "Convert a GLSL shader into a C header string constant")]
pub struct CliConfig {
    /// GLSL source file to embed
    pub source: String,

    /// Name of the generated string constant
    pub variable: String,

    #[arg(long, value_enum, default_value_t = DeclarationStyle::Pointer)]
    pub style: DeclarationStyle,

    /// Wrap the declaration in an include guard with this name
    #[arg(long)]
    pub guard: Option<String>,

    /// Write the header to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// What the command line asked for.
#[cfg(feature = "cli")]
#[derive(Debug)]
pub enum Invocation {
    Run(CliConfig),
    /// Wrong number of arguments: print [`USAGE`] and exit cleanly.
    Usage,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Parses `args` (program name first).
    ///
    /// Argument count mistakes map to [`Invocation::Usage`]; anything else
    /// clap rejects (including `--help`) is returned as the clap error.
    pub fn from_args<I, T>(args: I) -> std::result::Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => Ok(Invocation::Run(config)),
            Err(e) if is_argument_count_error(e.kind()) => Ok(Invocation::Usage),
            Err(e) => Err(e),
        }
    }
}

#[cfg(feature = "cli")]
fn is_argument_count_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
    )
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
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
        self.guard.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source", &self.source)?;
        validate_identifier("variable", &self.variable)?;
        if let Some(guard) = &self.guard {
            validate_identifier("guard", guard)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Option<CliConfig> {
        match CliConfig::from_args(args.iter().copied()).unwrap() {
            Invocation::Run(config) => Some(config),
            Invocation::Usage => None,
        }
    }

    #[test]
    fn test_two_positionals_run() {
        let config = run(&["glsl2h", "basic.vert", "basicVert"]).unwrap();
        assert_eq!(config.source, "basic.vert");
        assert_eq!(config.variable, "basicVert");
        assert_eq!(config.style, DeclarationStyle::Pointer);
        assert!(config.output_path().is_none());
    }

    #[test]
    fn test_wrong_argument_count_is_usage() {
        assert!(run(&["glsl2h"]).is_none());
        assert!(run(&["glsl2h", "basic.vert"]).is_none());
        assert!(run(&["glsl2h", "basic.vert", "basicVert", "extra"]).is_none());
    }

    #[test]
    fn test_options_parse() {
        let config = run(&[
            "glsl2h",
            "basic.vert",
            "basicVert",
            "--style",
            "array",
            "--guard",
            "BASIC_VERT_H",
            "-o",
            "out/basic.h",
        ])
        .unwrap();

        assert_eq!(config.style(), DeclarationStyle::Array);
        assert_eq!(config.include_guard(), Some("BASIC_VERT_H"));
        assert_eq!(config.output_path(), Some("out/basic.h"));
    }

    #[test]
    fn test_invalid_style_is_clap_error() {
        assert!(CliConfig::from_args(["glsl2h", "a.vert", "a", "--style", "vector"]).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_variable() {
        let config = run(&["glsl2h", "basic.vert", "basic-vert"]).unwrap();
        assert!(config.validate().is_err());

        let config = run(&["glsl2h", "basic.vert", "basicVert", "--guard", "1BAD"]).unwrap();
        assert!(config.validate().is_err());
    }
}
