use crate::domain::model::{OutputFormat, Range};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn range(&self) -> Range;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn output_filename(&self) -> String {
        self.output_format().default_filename()
    }
    fn monitoring_enabled(&self) -> bool;
}
