use crate::core::{ConfigProvider, OutputFormat, Range};
use crate::utils::error::{Result, ScanError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub range: RangeConfig,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub format: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCAN_END})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let end = validation::validate_required_field("range.end", &self.range.end)?;

        if let Some(output) = &self.output {
            validation::validate_path("output.path", &output.path)?;

            if let Some(format) = &output.format {
                validation::validate_output_format("output.format", format)?;
            }

            if let Some(filename) = &output.filename {
                validation::validate_non_empty_string("output.filename", filename)?;
            }
        }

        if let Some(log_format) = self.monitoring.as_ref().and_then(|m| m.log_format.as_deref()) {
            if !matches!(log_format, "compact" | "json") {
                return Err(ScanError::InvalidConfigValueError {
                    field: "monitoring.log_format".to_string(),
                    value: log_format.to_string(),
                    reason: "Valid log formats: compact, json".to_string(),
                });
            }
        }

        validation::check_range_span(self.start(), *end);
        Ok(())
    }

    /// 起點預設為 1
    pub fn start(&self) -> i64 {
        self.range.start.unwrap_or(1)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn range(&self) -> Range {
        // 未通過驗證 (缺少 end) 時退回預設終點
        Range::new(self.start(), self.range.end.unwrap_or(Range::default().end))
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.path.as_str())
    }

    fn output_format(&self) -> OutputFormat {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some("tsv") => OutputFormat::Tsv,
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Csv,
        }
    }

    fn output_filename(&self) -> String {
        self.output
            .as_ref()
            .and_then(|o| o.filename.clone())
            .unwrap_or_else(|| self.output_format().default_filename())
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
