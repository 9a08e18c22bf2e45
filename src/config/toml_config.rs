use crate::core::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::domain::model::{CostCheck, PuzzleParams};
use crate::utils::error::{PuzzleError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every section and field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub puzzle: PuzzleConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub rooster_price: Option<u32>,
    pub hen_price: Option<u32>,
    pub chick_batch_size: Option<u32>,
    pub chick_batch_price: Option<u32>,
    pub budget: Option<u32>,
    pub total_birds: Option<u32>,
    pub tolerance: Option<f64>,
    pub check: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

impl PuzzleConfig {
    /// 將檔案中的值疊加到經典題目的預設值上
    pub fn to_params(&self) -> Result<PuzzleParams> {
        let classic = PuzzleParams::classic();
        let check = match &self.check {
            Some(check) => check.parse::<CostCheck>()?,
            None => classic.check,
        };

        Ok(PuzzleParams {
            rooster_price: self.rooster_price.unwrap_or(classic.rooster_price),
            hen_price: self.hen_price.unwrap_or(classic.hen_price),
            chick_batch_size: self.chick_batch_size.unwrap_or(classic.chick_batch_size),
            chick_batch_price: self.chick_batch_price.unwrap_or(classic.chick_batch_price),
            budget: self.budget.unwrap_or(classic.budget),
            total_birds: self.total_birds.unwrap_or(classic.total_birds),
            tolerance: self.tolerance.unwrap_or(classic.tolerance),
            check,
        })
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| PuzzleError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            PuzzleError::ConfigParseError { message, .. } => PuzzleError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PuzzleError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${BUDGET})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::{Captures, Regex};
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("static env var pattern is valid")
        });

        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn params(&self) -> Result<PuzzleParams> {
        self.puzzle.to_params()
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match &self.output.format {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    /// 驗證後轉成執行期配置
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;
        Ok(ResolvedConfig {
            params: self.params()?,
            format: self.output_format()?,
            output_path: self.output.path.clone(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.params()?.validate()?;
        self.output_format()?;
        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }
        Ok(())
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub params: PuzzleParams,
    pub format: OutputFormat,
    pub output_path: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            params: PuzzleParams::classic(),
            format: OutputFormat::Table,
            output_path: None,
        }
    }
}

impl ConfigProvider for ResolvedConfig {
    fn params(&self) -> &PuzzleParams {
        &self.params
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}
