#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::ChildCommand;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_CONFIG_FILE: &str = "molecule-x.toml";

#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";

/// Resolved launcher configuration: built-in defaults, then the TOML file,
/// then command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    pub python: String,
    pub ui_module: String,
    pub app_script: String,
    pub train_script: String,
    pub simulate_script: String,
    pub working_dir: PathBuf,
    pub dry_run: bool,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            ui_module: "streamlit".to_string(),
            app_script: "src/app.py".to_string(),
            train_script: "src/train.py".to_string(),
            simulate_script: "src/simulate_impact.py".to_string(),
            working_dir: PathBuf::from("."),
            dry_run: false,
        }
    }
}

impl LauncherSettings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let mut settings = Self::default();
        let TomlConfig { launcher, scripts } = config.clone();

        if let Some(python) = launcher.python {
            settings.python = python;
        }
        if let Some(dir) = launcher.working_dir {
            settings.working_dir = PathBuf::from(dir);
        }
        if let Some(module) = scripts.ui_module {
            settings.ui_module = module;
        }
        if let Some(app) = scripts.app {
            settings.app_script = app;
        }
        if let Some(train) = scripts.train {
            settings.train_script = train;
        }
        if let Some(simulate) = scripts.simulate {
            settings.simulate_script = simulate;
        }

        settings
    }

    fn interpreter(&self) -> ChildCommand {
        ChildCommand::new(self.python.clone(), self.working_dir.clone())
    }

    /// `<python> -m <ui_module> run <app>`
    pub fn ui_command(&self) -> ChildCommand {
        self.interpreter()
            .arg("-m")
            .arg(self.ui_module.clone())
            .arg("run")
            .arg(self.app_script.clone())
    }

    pub fn train_command(&self) -> ChildCommand {
        self.interpreter().arg(self.train_script.clone())
    }

    pub fn simulate_command(&self) -> ChildCommand {
        self.interpreter().arg(self.simulate_script.clone())
    }
}

impl Validate for LauncherSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("launcher.python", &self.python)?;
        validate_non_empty_string("scripts.ui_module", &self.ui_module)?;
        validate_path("scripts.app", &self.app_script)?;
        validate_path("scripts.train", &self.train_script)?;
        validate_path("scripts.simulate", &self.simulate_script)?;
        validate_path("launcher.working_dir", &self.working_dir.to_string_lossy())?;
        Ok(())
    }
}
