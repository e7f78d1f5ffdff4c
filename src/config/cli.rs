use super::toml_config::TomlConfig;
use super::{LauncherSettings, DEFAULT_CONFIG_FILE};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "molecule-x")]
#[command(version)]
#[command(about = "Molecule-X: AI-Native Multi-Agent Drug Repurposing System")]
pub struct CliArgs {
    /// Path to TOML configuration file [default: molecule-x.toml, if present]
    #[arg(short, long)]
    pub config: Option<String>,

    /// Python interpreter used to run the scripts
    #[arg(long)]
    pub python: Option<String>,

    /// Directory the scripts are run from
    #[arg(long)]
    pub working_dir: Option<String>,

    /// Print the command for the chosen option instead of running it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// 合併預設值、TOML 檔與命令列覆蓋設定，並驗證結果
    pub fn load_settings(&self) -> Result<LauncherSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::debug!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                TomlConfig::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                tracing::debug!("No configuration file, using built-in defaults");
                TomlConfig::default()
            }
        };

        let settings = self.apply_overrides(LauncherSettings::from_toml(&file_config));
        settings.validate()?;
        Ok(settings)
    }

    fn apply_overrides(&self, mut settings: LauncherSettings) -> LauncherSettings {
        if let Some(python) = &self.python {
            settings.python = python.clone();
        }
        if let Some(dir) = &self.working_dir {
            settings.working_dir = PathBuf::from(dir);
        }
        settings.dry_run = self.dry_run;
        settings
    }
}
