use crate::config::toml_config::{ResolvedConfig, TomlConfig};
use crate::core::report::OutputFormat;
use crate::domain::model::CostCheck;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hundred-chickens")]
#[command(about = "Brute-force solver for the hundred chickens puzzle")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides [output].format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Require whole chick batches and an exact integer cost
    #[arg(long)]
    pub exact: bool,

    /// Log process CPU and memory usage
    #[arg(long)]
    pub monitor: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Show the resolved configuration without solving
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 預設值 < 設定檔 < 命令列參數
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let mut file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(format) = self.format {
            file_config.output.format = Some(format.as_str().to_string());
        }
        if let Some(output) = &self.output {
            file_config.output.path = Some(output.clone());
        }
        if self.exact {
            file_config.puzzle.check = Some(CostCheck::Exact.as_str().to_string());
        }

        file_config.resolve()
    }
}
