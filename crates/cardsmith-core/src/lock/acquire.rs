//! Retry loop with exponential backoff

use super::{LockError, LockGuard, LockMode};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(10);
const MAX_RETRY_DELAY: Duration = Duration::from_millis(500);
const WAIT_NOTICE_THRESHOLD: Duration = Duration::from_secs(2);

fn try_lock(file: &File, mode: LockMode) -> io::Result<()> {
    match mode {
        LockMode::Exclusive => file.try_lock_exclusive(),
        LockMode::Shared => FileExt::try_lock_shared(file),
    }
}

fn io_error(source: io::Error, lock_path: &Path, operation: &str) -> LockError {
    LockError::Io {
        source,
        path: lock_path.to_path_buf(),
        operation: operation.to_string(),
    }
}

pub(crate) fn acquire_with_retry(
    lock_path: &Path,
    mode: LockMode,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    if let Some(parent) = lock_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| io_error(e, lock_path, "create parent directories"))?;
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)
        .map_err(|e| io_error(e, lock_path, "open lock file"))?;

    let start = Instant::now();
    let mut retry_delay = INITIAL_RETRY_DELAY;
    let mut noticed = false;

    loop {
        match try_lock(&file, mode) {
            Ok(()) => {
                return Ok(LockGuard {
                    file,
                    path: lock_path.to_path_buf(),
                    mode,
                });
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                let elapsed = start.elapsed();
                if elapsed >= timeout {
                    return Err(LockError::Timeout {
                        path: lock_path.to_path_buf(),
                        description: description.to_string(),
                    });
                }

                if !noticed && elapsed >= WAIT_NOTICE_THRESHOLD {
                    tracing::info!(
                        lock = %lock_path.display(),
                        ?mode,
                        "waiting for lock ({description})"
                    );
                    noticed = true;
                }

                thread::sleep(retry_delay.min(timeout.saturating_sub(elapsed)));
                retry_delay = (retry_delay * 2).min(MAX_RETRY_DELAY);
            }
            Err(e) => return Err(io_error(e, lock_path, "acquire lock")),
        }
    }
}
