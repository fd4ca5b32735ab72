//! Image bytes and image metadata.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::ImageRecord;

/// Destination for finished image bytes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobSink: Send + Sync {
    /// Persist `bytes` under `name`, returning where they ended up.
    async fn write(&self, name: &str, bytes: Vec<u8>) -> CatalogResult<String>;
}

/// Writes each blob to `{folder}/{name}`.
#[derive(Debug, Clone)]
pub struct DiskBlobSink {
    folder: PathBuf,
}

impl DiskBlobSink {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &PathBuf {
        &self.folder
    }
}

#[async_trait]
impl BlobSink for DiskBlobSink {
    async fn write(&self, name: &str, bytes: Vec<u8>) -> CatalogResult<String> {
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with("..") {
            return Err(CatalogError::internal(format!("refusing blob name {name:?}")));
        }

        tokio::fs::create_dir_all(&self.folder).await.map_err(|e| {
            CatalogError::internal(format!("cannot create image folder: {e}"))
        })?;

        let path = self.folder.join(name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| CatalogError::internal(format!("cannot write image file: {e}")))?;

        Ok(path.display().to_string())
    }
}

/// Keeps blobs in memory; handy for tests and ephemeral runs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBlobSink {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryBlobSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.blobs.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl BlobSink for InMemoryBlobSink {
    async fn write(&self, name: &str, bytes: Vec<u8>) -> CatalogResult<String> {
        self.blobs.write().await.insert(name.to_string(), bytes);
        Ok(format!("memory://{name}"))
    }
}

/// Metadata for stored images, keyed by image id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn save(&self, record: ImageRecord) -> CatalogResult<()>;

    async fn find(&self, image_id: &str) -> CatalogResult<Option<ImageRecord>>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryImageStore {
    images: Arc<RwLock<HashMap<String, ImageRecord>>>,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn save(&self, record: ImageRecord) -> CatalogResult<()> {
        let mut images = self.images.write().await;
        if images.contains_key(&record.id) {
            return Err(CatalogError::internal(format!(
                "image {} is already recorded",
                record.id
            )));
        }
        images.insert(record.id.clone(), record);
        Ok(())
    }

    async fn find(&self, image_id: &str) -> CatalogResult<Option<ImageRecord>> {
        Ok(self.images.read().await.get(image_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            laptop_id: "laptop".to_string(),
            image_type: ".jpg".to_string(),
            location: format!("img/{id}.jpg"),
            size: 3,
        }
    }

    #[tokio::test]
    async fn test_disk_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskBlobSink::new(dir.path().join("img"));

        let location = sink.write("abc.png", vec![1, 2, 3]).await.unwrap();

        assert_eq!(location, dir.path().join("img").join("abc.png").display().to_string());
        let written = tokio::fs::read(dir.path().join("img/abc.png")).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_disk_sink_rejects_path_names() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskBlobSink::new(dir.path());

        for name in ["", "../escape.png", "nested/file.png"] {
            let err = sink.write(name, vec![0]).await.unwrap_err();
            assert!(matches!(err, CatalogError::Internal(_)), "{name:?}");
        }
    }

    #[tokio::test]
    async fn test_disk_sink_failure_is_internal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        tokio::fs::write(&blocker, b"file").await.unwrap();

        let sink = DiskBlobSink::new(&blocker);
        let err = sink.write("x.png", vec![0]).await.unwrap_err();
        assert!(matches!(err, CatalogError::Internal(_)));
    }

    #[tokio::test]
    async fn test_memory_sink_round_trip() {
        let sink = InMemoryBlobSink::new();
        assert!(sink.is_empty().await);

        let location = sink.write("a.bin", vec![9; 4]).await.unwrap();
        assert_eq!(location, "memory://a.bin");
        assert_eq!(sink.get("a.bin").await, Some(vec![9; 4]));
        assert_eq!(sink.len().await, 1);
    }

    #[tokio::test]
    async fn test_image_store_records_once() {
        let store = InMemoryImageStore::new();
        store.save(record("one")).await.unwrap();

        assert_eq!(store.find("one").await.unwrap(), Some(record("one")));
        assert!(store.find("two").await.unwrap().is_none());
        assert!(store.save(record("one")).await.is_err());
    }
}
