use crate::config::Settings;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: ServerConfig,
    pub endpoints: Option<EndpointsConfig>,
    pub archive: Option<ArchiveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub structure: Option<String>,
    pub click_log: Option<String>,
    pub preregister: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub path: String,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PLAN_FORM_URL})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_settings(self) -> Settings {
        let mut settings = Settings {
            base_url: self.server.base_url,
            ..Settings::default()
        };

        if let Some(endpoints) = self.endpoints {
            if let Some(path) = endpoints.structure {
                settings.structure_path = path;
            }
            if let Some(path) = endpoints.click_log {
                settings.click_log_path = path;
            }
            if let Some(path) = endpoints.preregister {
                settings.preregister_path = path;
            }
        }
        settings.archive_path = self.archive.map(|archive| archive.path);
        settings
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}
