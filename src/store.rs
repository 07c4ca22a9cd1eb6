//! Named-blob storage boundary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

const MAX_BLOB_NAME_LENGTH: usize = 128;

/// Abstract named-blob storage consumed by the catalog and the session
/// load/save path.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Every blob name currently in the store.
    async fn list_names(&self) -> Result<Vec<String>>;

    /// Full text content of a blob. Fails if the name is absent.
    async fn read_text(&self, name: &str) -> Result<String>;

    /// Create or unconditionally replace a blob.
    async fn write_text(&self, name: &str, content: &str) -> Result<()>;

    /// Last modification time of a blob.
    async fn modified_time(&self, name: &str) -> Result<DateTime<Utc>>;
}

/// One text file per stored session, all in a single saves directory.
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Creates the saves directory if it does not exist yet.
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create saves dir: {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn blob_path(&self, name: &str) -> Result<PathBuf> {
        validate_blob_name(name)?;
        Ok(self.dir.join(name))
    }
}

fn validate_blob_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("blob name cannot be empty");
    }
    if name.len() > MAX_BLOB_NAME_LENGTH {
        bail!("blob name too long (max {MAX_BLOB_NAME_LENGTH})");
    }
    if name == "." || name.contains("..") {
        bail!("blob name cannot contain a path traversal sequence");
    }
    if name.contains('/') || name.contains('\\') {
        bail!("blob name cannot contain path separators");
    }
    Ok(())
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn list_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("failed to list saves dir: {}", self.dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    async fn read_text(&self, name: &str) -> Result<String> {
        let path = self.blob_path(name)?;
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read save file: {}", path.display()))
    }

    async fn write_text(&self, name: &str, content: &str) -> Result<()> {
        let path = self.blob_path(name)?;
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("failed to write save file: {}", path.display()))?;
        debug!(name = %name, bytes = content.len(), "wrote save blob");
        Ok(())
    }

    async fn modified_time(&self, name: &str) -> Result<DateTime<Utc>> {
        let path = self.blob_path(name)?;
        let meta = tokio::fs::metadata(&path)
            .await
            .with_context(|| format!("failed to stat save file: {}", path.display()))?;
        let modified = meta
            .modified()
            .with_context(|| format!("no modification time for: {}", path.display()))?;
        Ok(DateTime::<Utc>::from(modified))
    }
}
