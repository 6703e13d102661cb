pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Invocation};

pub use config::{cli::LocalStorage, manifest::BatchConfig, USAGE};
pub use core::{batch::BatchRunner, engine::HeaderEngine, pipeline::ShaderPipeline};
pub use utils::error::{HeaderError, Result};
