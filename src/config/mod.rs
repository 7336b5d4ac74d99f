pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// 解析完成、實際使用的設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub structure_path: String,
    pub click_log_path: String,
    pub preregister_path: String,
    pub archive_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            structure_path: "/structure".to_string(),
            click_log_path: "/api/clicklog".to_string(),
            preregister_path: "/api/preregister".to_string(),
            archive_path: None,
        }
    }
}

impl Settings {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn structure_path(&self) -> &str {
        &self.structure_path
    }

    fn click_log_path(&self) -> &str {
        &self.click_log_path
    }

    fn preregister_path(&self) -> &str {
        &self.preregister_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server.base_url", &self.base_url)?;
        validation::validate_endpoint_path("endpoints.structure", &self.structure_path)?;
        validation::validate_endpoint_path("endpoints.click_log", &self.click_log_path)?;
        validation::validate_endpoint_path("endpoints.preregister", &self.preregister_path)?;
        if let Some(path) = &self.archive_path {
            validation::validate_path("archive.path", path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use client::{ClientConfig, Command};

#[cfg(feature = "cli")]
mod client {
    use super::toml_config::FileConfig;
    use super::Settings;
    use crate::utils::error::Result;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "plan-form")]
    #[command(about = "Request report outline plans and pre-register from the terminal")]
    pub struct ClientConfig {
        #[arg(long, help = "Server base URL (overrides the config file)")]
        pub base_url: Option<String>,

        #[arg(long, help = "Path to a TOML configuration file")]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Fill the form with a random example and print it
        Example,
        /// Request three outline plans
        Generate {
            #[arg(long, default_value = "")]
            theme: String,
            #[arg(long, default_value = "")]
            faculty: String,
            #[arg(long, default_value = "")]
            length: String,
            #[arg(long, help = "Start from a random example instead of the fields above")]
            example: bool,
            #[arg(long, help = "Directory to append the generated plans to")]
            archive: Option<String>,
        },
        /// Open the pre-registration form and submit it
        Register {
            #[arg(long)]
            name: String,
            #[arg(long)]
            email: String,
        },
    }

    impl ClientConfig {
        /// 設定檔優先，命令列參數再覆寫
        pub fn settings(&self) -> Result<Settings> {
            let mut settings = match &self.config {
                Some(path) => FileConfig::from_file(path)?.into_settings(),
                None => Settings::default(),
            };

            if let Some(base_url) = &self.base_url {
                settings.base_url = base_url.clone();
            }
            if let Command::Generate {
                archive: Some(path),
                ..
            } = &self.command
            {
                settings.archive_path = Some(path.clone());
            }
            Ok(settings)
        }
    }

}
