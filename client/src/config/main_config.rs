use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::SessionConfig;
use crate::theme::{AnimationSpeed, ThemeSettings, ThemeType};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: impl Into<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub session: SessionConfig,
    pub theme: ThemeType,
    pub animation_speed: AnimationSpeed,
}

impl Config {
    pub fn theme_settings(&self) -> ThemeSettings {
        ThemeSettings::new(self.theme, self.animation_speed)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.session.validate()?;
        Ok(())
    }
}
