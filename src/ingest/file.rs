use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the bytes of a selected file come from.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Content already held in memory, e.g. handed over by a file picker.
    Memory(Arc<[u8]>),
    /// A file on disk, read only once validation has passed.
    Disk(PathBuf)
}

/// A file chosen by the user for upload.
///
/// `name` and `size` are known up front so the ingestor can reject a file
/// before reading any of its content.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    name: String,
    size: u64,
    source: FileSource
}

impl SelectedFile {
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();

        Self {
            name: name.into(),
            size: bytes.len() as u64,
            source: FileSource::Memory(Arc::from(bytes))
        }
    }

    /// Describes a file on disk using its metadata; the content is not read yet.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;

        let name = path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            size: metadata.len(),
            source: FileSource::Disk(path.to_path_buf())
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    pub(crate) async fn read(&self) -> io::Result<Arc<[u8]>> {
        match &self.source {
            FileSource::Memory(bytes) => Ok(bytes.clone()),
            FileSource::Disk(path) => tokio::fs::read(path).await.map(Arc::from)
        }
    }
}
