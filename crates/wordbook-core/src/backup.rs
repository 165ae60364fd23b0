use std::fs;
use std::path::{Path, PathBuf};

use wordbook_types::{Dictionary, EXPORT_FILENAME};

use crate::dictionary::DictionaryCore;
use crate::error::CoreError;

impl DictionaryCore {
    /// Full mapping as pretty JSON
    pub fn export_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self.dictionary())?)
    }

    /// Write the backup file into `dir`, returning its path
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf, CoreError> {
        let path = dir.join(EXPORT_FILENAME);
        fs::create_dir_all(dir)?;
        fs::write(&path, self.export_json()?)?;
        tracing::info!("Exported {} entries to {}", self.dictionary().len(), path.display());
        Ok(path)
    }

    /// Merge a serialized mapping; nothing is merged if it doesn't parse.
    /// Keys are taken as they appear in the file.
    pub fn import_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let imported: Dictionary = serde_json::from_str(json)?;
        let count = imported.len();
        self.merge(imported);
        Ok(count)
    }

    pub fn import_from(&mut self, path: &Path) -> Result<usize, CoreError> {
        let json = fs::read_to_string(path)?;
        self.import_json(&json)
    }
}
