use crate::utils::error::{LauncherError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Contents of `molecule-x.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub launcher: LauncherSection,
    #[serde(default)]
    pub scripts: ScriptsSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LauncherSection {
    pub python: Option<String>,
    pub working_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScriptsSection {
    pub ui_module: Option<String>,
    pub app: Option<String>,
    pub train: Option<String>,
    pub simulate: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LauncherError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LauncherError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PYTHON_BIN})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LauncherError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}
