mod config_content_provider;
mod config_manager;
mod config_serializer;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};

/// Checked by [`ConfigManager`] after every load and before every save.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
