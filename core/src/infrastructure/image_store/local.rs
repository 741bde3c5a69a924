use std::path::{Path, PathBuf};

use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    ingredient::{
        entities::{StoredImage, UploadedImage},
        ports::ImageStore,
    },
};

/// Writes uploads into a directory that the HTTP layer serves statically.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    directory: PathBuf,
    public_path: String,
}

impl LocalImageStore {
    pub async fn new(directory: PathBuf, public_path: String) -> Result<Self, CoreError> {
        tokio::fs::create_dir_all(&directory).await.map_err(|e| {
            CoreError::StorageError(format!(
                "failed to create upload directory {}: {}",
                directory.display(),
                e
            ))
        })?;

        Ok(Self {
            directory,
            public_path: public_path.trim_end_matches('/').to_string(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_path, file_name)
    }
}

impl ImageStore for LocalImageStore {
    #[instrument(skip(self, image), fields(file_name = %image.file_name, size = image.data.len()))]
    async fn save(&self, image: &UploadedImage) -> Result<StoredImage, CoreError> {
        let file_name = format!(
            "{}-{}",
            generate_uuid_v7(),
            sanitize_file_name(&image.file_name)
        );
        let path = self.directory.join(&file_name);

        tokio::fs::write(&path, &image.data).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to write upload");
            CoreError::StorageError(format!("failed to write {}: {}", file_name, e))
        })?;

        Ok(StoredImage {
            url: self.url_for(&file_name),
            file_name,
            path,
        })
    }

    #[instrument(skip(self, stored), fields(file_name = %stored.file_name))]
    async fn remove(&self, stored: &StoredImage) -> Result<(), CoreError> {
        tokio::fs::remove_file(&stored.path).await.map_err(|e| {
            error!(path = %stored.path.display(), error = %e, "Failed to remove upload");
            CoreError::StorageError(format!("failed to remove {}: {}", stored.file_name, e))
        })
    }
}

/// Keeps only the last path component and replaces anything outside
/// `[A-Za-z0-9._-]`, so the result always stays inside the upload directory.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\tomato.jpg"), "tomato.jpg");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_file_name("red onion (1).png"), "red_onion__1_.png");
    }

    #[test]
    fn test_sanitize_never_returns_hidden_or_empty_names() {
        assert_eq!(sanitize_file_name(".."), "upload");
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name(".env"), "env");
    }

    #[tokio::test]
    async fn test_save_writes_inside_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("uploads"), "/uploads/".to_string())
            .await
            .unwrap();
        let image = UploadedImage::new(
            "../tomato.png",
            Some("image/png".to_string()),
            Bytes::from_static(b"not really a png"),
        );

        let stored = store.save(&image).await.unwrap();

        assert!(stored.file_name.ends_with("-tomato.png"));
        assert_eq!(stored.path.parent(), Some(store.directory()));
        assert_eq!(stored.url, format!("/uploads/{}", stored.file_name));
        assert_eq!(std::fs::read(&stored.path).unwrap(), b"not really a png");
    }

    #[tokio::test]
    async fn test_remove_deletes_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().to_path_buf(), "/uploads".to_string())
            .await
            .unwrap();
        let image = UploadedImage::new("kiwi.jpg", None, Bytes::from_static(b"jpg"));
        let stored = store.save(&image).await.unwrap();

        store.remove(&stored).await.unwrap();

        assert!(!stored.path.exists());
        assert!(matches!(
            store.remove(&stored).await,
            Err(CoreError::StorageError(_))
        ));
    }
}
