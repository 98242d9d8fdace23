use serde::{Deserialize, Serialize};

pub trait SettingsSerializer<TSettings> {
    fn serialize(&self, settings: &TSettings) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TSettings, String>;
}

#[derive(Default)]
pub struct YamlSettingsSerializer;

impl<TSettings> SettingsSerializer<TSettings> for YamlSettingsSerializer
where
    TSettings: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, settings: &TSettings) -> Result<String, String> {
        serde_yaml_ng::to_string(settings)
            .map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TSettings, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse settings: {}", e))
    }
}
