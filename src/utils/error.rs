use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read shader source '{path}': {source}")]
    SourceReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write header '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest parsing error: {0}")]
    ManifestParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

impl HeaderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HeaderError::IoError(_)
            | HeaderError::SourceReadError { .. }
            | HeaderError::OutputWriteError { .. } => ErrorCategory::Io,
            HeaderError::ManifestParseError(_)
            | HeaderError::InvalidConfigValueError { .. }
            | HeaderError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HeaderError::SourceReadError { path, source } => {
                format!("Cannot read shader '{}': {}", path, source)
            }
            HeaderError::OutputWriteError { path, source } => {
                format!("Cannot write header '{}': {}", path, source)
            }
            HeaderError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid {} '{}': {}", field, value, reason)
            }
            HeaderError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HeaderError::SourceReadError { .. } => {
                "Check that the shader path exists and is readable"
            }
            HeaderError::OutputWriteError { .. } => {
                "Check that the output directory is writable"
            }
            HeaderError::IoError(_) => "Check file permissions and available disk space",
            HeaderError::ManifestParseError(_) => "Make sure the manifest is valid TOML",
            HeaderError::InvalidConfigValueError { .. } => {
                "Variable and guard names must be C identifiers, e.g. basic_vert"
            }
            HeaderError::MissingConfigError { .. } => "Add the missing setting and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, HeaderError>;
