pub mod batch;
pub mod engine;
pub mod escape;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{DeclarationStyle, HeaderOutput, HeaderSpec, ShaderSource};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
