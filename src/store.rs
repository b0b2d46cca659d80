use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::async_trait;
use bytes::Bytes;

/// Content store for rendered report artifacts, keyed by filename.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn put(&self, filename: &str, body: Bytes) -> anyhow::Result<()>;
    /// Returns `None` when no artifact exists under `filename`.
    async fn get(&self, filename: &str) -> anyhow::Result<Option<Bytes>>;
}

/// Filesystem-backed store rooted at a fixed directory.
#[derive(Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub async fn new(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("create reports dir {}", root.display()))?;
        Ok(Self { root })
    }
}

#[async_trait]
impl DocumentStore for FsStore {
    async fn put(&self, filename: &str, body: Bytes) -> anyhow::Result<()> {
        let path = self.root.join(filename);
        tokio::fs::write(&path, &body)
            .await
            .with_context(|| format!("write artifact {}", path.display()))?;
        Ok(())
    }

    async fn get(&self, filename: &str) -> anyhow::Result<Option<Bytes>> {
        let path = self.root.join(filename);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(Bytes::from(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read artifact {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsStore::new(dir.path()).await.expect("store");

        store
            .put("report_a_20240101_000000.html", Bytes::from_static(b"<html>"))
            .await
            .expect("put");

        let got = store
            .get("report_a_20240101_000000.html")
            .await
            .expect("get");
        assert_eq!(got, Some(Bytes::from_static(b"<html>")));
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsStore::new(dir.path()).await.expect("store");
        let got = store.get("nope.html").await.expect("get");
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn new_creates_missing_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("deep/reports");
        FsStore::new(&nested).await.expect("store");
        assert!(nested.is_dir());
    }
}
