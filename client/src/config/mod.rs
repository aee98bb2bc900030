mod main_config;
mod session_config;

pub use main_config::{Config, get_config_manager, get_config_path};
pub use session_config::SessionConfig;
