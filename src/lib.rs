pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::process::SystemProcessRunner;
pub use crate::config::{toml_config::TomlConfig, LauncherSettings};
pub use crate::core::launcher::Launcher;
pub use crate::domain::model::{ChildCommand, ChildStatus, DispatchOutcome, MenuChoice};
pub use crate::domain::ports::ProcessRunner;
pub use crate::utils::error::{LauncherError, Result};
