use serde::{Deserialize, Serialize};

/// How the string constant is declared in the generated header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStyle {
    /// `const char* name = ...;`
    #[default]
    Pointer,
    /// `const char name[] = ...;`
    Array,
}

impl DeclarationStyle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Array => "array",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    pub variable: String,
    pub style: DeclarationStyle,
    pub include_guard: Option<String>,
}

/// Raw shader text, one entry per input line with the terminator removed.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub path: String,
    pub lines: Vec<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct HeaderOutput {
    pub variable: String,
    pub line_count: usize,
    pub text: String,
}
