use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_output(&self, _name: &str, data: &[u8]) -> Result<String> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(data)?;
        handle.flush()?;
        Ok("stdout".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl OutputSink for LocalStorage {
    fn write_output(&self, name: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(full_path.display().to_string())
    }
}
