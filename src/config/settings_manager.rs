use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::settings_provider::{FileSettingsProvider, SettingsProvider};
use super::settings_serializer::{SettingsSerializer, YamlSettingsSerializer};
use super::validate::Validate;

pub struct SettingsManager<TProvider, TSettings, TSerializer = YamlSettingsSerializer>
where
    TProvider: SettingsProvider,
    TSettings: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: SettingsSerializer<TSettings>,
{
    provider: TProvider,
    serializer: TSerializer,
    cached: Mutex<Option<TSettings>>,
}

impl<TSettings> SettingsManager<FileSettingsProvider, TSettings>
where
    TSettings: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self {
            provider: FileSettingsProvider::new(path),
            serializer: YamlSettingsSerializer,
            cached: Mutex::new(None),
        }
    }
}

impl<TProvider, TSettings, TSerializer> SettingsManager<TProvider, TSettings, TSerializer>
where
    TProvider: SettingsProvider,
    TSettings: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: SettingsSerializer<TSettings>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn get(&self) -> Result<TSettings, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(settings) = cached.as_ref() {
            return Ok(settings.clone());
        }

        let Some(content) = self.provider.load()? else {
            return Ok(TSettings::default());
        };

        let settings = self.serializer.deserialize(&content)?;
        settings
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;

        *cached = Some(settings.clone());
        Ok(settings)
    }

    pub fn set(&self, settings: &TSettings) -> Result<(), String> {
        settings
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;

        let content = self.serializer.serialize(settings)?;
        self.provider.store(&content)?;

        *self.cached.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}
