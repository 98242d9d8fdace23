mod settings_manager;
mod settings_provider;
mod settings_serializer;
mod validate;

pub use settings_manager::SettingsManager;
pub use settings_provider::{FileSettingsProvider, MemorySettingsProvider, SettingsProvider};
pub use settings_serializer::{SettingsSerializer, YamlSettingsSerializer};
pub use validate::Validate;
