//! Directory-backed provider: one `<collection>.json` file per collection.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::Collection;

use super::{ProviderError, RecordProvider};

/// Reads collection exports from a directory, e.g. `data/devices.json`.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    /// Opens `root`. Fails if it is not a directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ProviderError::Io(format!(
                "Not a directory: {}",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.name()))
    }
}

impl RecordProvider for DirectoryProvider {
    fn fetch(&self, collection: Collection) -> Result<Vec<u8>, ProviderError> {
        let path = self.path_for(collection);
        debug!(path = %path.display(), "reading collection");
        std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProviderError::Missing(collection),
            _ => ProviderError::Io(format!("Failed to read {}: {}", path.display(), e)),
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Device;
    use crate::provider::{load, load_or_empty};

    #[test]
    fn reads_collection_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("devices.json"),
            r#"[{"_id": "d1", "deviceId": "CAM-1", "status": "active"}]"#,
        )
        .unwrap();

        let provider = DirectoryProvider::open(dir.path()).unwrap();
        let devices: Vec<Device> = load(&provider, Collection::Devices).unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].device_id.as_deref(), Some("CAM-1"));
    }

    #[test]
    fn missing_file_is_missing_collection() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryProvider::open(dir.path()).unwrap();
        assert!(matches!(
            provider.fetch(Collection::Nodes),
            Err(ProviderError::Missing(Collection::Nodes))
        ));
        let devices: Vec<Device> = load_or_empty(&provider, Collection::Devices);
        assert!(devices.is_empty());
    }

    #[test]
    fn open_rejects_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(DirectoryProvider::open(file.path()).is_err());
    }
}
