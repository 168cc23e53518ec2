use crate::domain::model::ReportFormat;
use crate::domain::ports::BatchSettings;
use crate::utils::error::{PassError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_one_of, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchConfig,
    pub validation: Option<ValidationConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub name: String,
    pub description: Option<String>,
    pub input: String,
    pub output_path: String,
    pub output_format: Option<String>,
    pub output_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PassError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${VISITOR_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PassError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;
        validate_path("batch.input", &self.batch.input)?;
        validate_file_extension("batch.input", &self.batch.input, &["csv"])?;
        validate_path("batch.output_path", &self.batch.output_path)?;

        if let Some(format) = &self.batch.output_format {
            validate_one_of("batch.output_format", &format.to_ascii_lowercase(), &["csv", "json"])?;
        }

        if let Some(file) = &self.batch.output_file {
            validate_path("batch.output_file", file)?;
            validate_file_extension("batch.output_file", file, &[self.report_format().extension()])?;
        }

        if let Some(level) = self.log_level() {
            validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        &self.batch.output_path
    }

    pub fn strict_mode(&self) -> bool {
        self.validation.as_ref().and_then(|v| v.strict).unwrap_or(false)
    }

    pub fn set_strict_mode(&mut self, strict: bool) {
        self.validation
            .get_or_insert(ValidationConfig { strict: None })
            .strict = Some(strict);
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl BatchSettings for TomlConfig {
    fn input(&self) -> &str {
        &self.batch.input
    }

    fn output_file(&self) -> String {
        let file_name = self
            .batch
            .output_file
            .clone()
            .unwrap_or_else(|| format!("passes.{}", self.report_format().extension()));
        Path::new(&self.batch.output_path)
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }

    fn report_format(&self) -> ReportFormat {
        // 未知格式由 validate_config 擋下
        self.batch
            .output_format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn strict(&self) -> bool {
        self.strict_mode()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
