use crate::domain::model::{DeclarationStyle, HeaderOutput, ShaderSource};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn source_path(&self) -> &str;
    fn variable_name(&self) -> &str;
    fn style(&self) -> DeclarationStyle;
    fn include_guard(&self) -> Option<&str>;
    /// `None` means standard output.
    fn output_path(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ShaderSource>;
    fn transform(&self, source: ShaderSource) -> Result<HeaderOutput>;
    /// Returns a description of where the header went.
    fn load(&self, output: HeaderOutput) -> Result<String>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}
