use crate::core::report::OutputFormat;
use crate::domain::model::PuzzleParams;
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn params(&self) -> &PuzzleParams;
    fn output_format(&self) -> OutputFormat;
    /// Explicit output file; `None` lets the engine pick `solutions.<ext>`.
    fn output_path(&self) -> Option<&str>;
}

/// Destination for rendered output. Returns a description of where the data went.
pub trait OutputSink {
    fn write_output(&self, name: &str, data: &[u8]) -> Result<String>;
}
