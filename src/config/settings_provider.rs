use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait SettingsProvider {
    fn load(&self) -> Result<Option<String>, String>;
    fn store(&self, content: &str) -> Result<(), String>;
}

pub struct FileSettingsProvider {
    path: PathBuf,
}

impl FileSettingsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsProvider for FileSettingsProvider {
    fn load(&self) -> Result<Option<String>, String> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| format!("Failed to read {}: {}", self.path.display(), e))
    }

    fn store(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
        fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }
}

#[derive(Default)]
pub struct MemorySettingsProvider {
    content: Mutex<Option<String>>,
}

impl SettingsProvider for MemorySettingsProvider {
    fn load(&self) -> Result<Option<String>, String> {
        Ok(self.content.lock().unwrap().clone())
    }

    fn store(&self, content: &str) -> Result<(), String> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}
