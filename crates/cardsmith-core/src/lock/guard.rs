use super::LockMode;
use fs2::FileExt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Held lock; released on drop
#[derive(Debug)]
pub struct LockGuard {
    pub(crate) file: File,
    pub(crate) path: PathBuf,
    pub(crate) mode: LockMode,
}

impl LockGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::debug!(lock = %self.path.display(), "unlock failed: {e}");
        }
    }
}
