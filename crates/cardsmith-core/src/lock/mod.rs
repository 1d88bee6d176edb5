//! Advisory file locks guarding the field store
//!
//! Writers take an exclusive lock, readers a shared one, on a sidecar
//! `.lock` file next to the store. Locks are held through fs2 and released
//! when the returned [`LockGuard`] drops.

use std::path::Path;
use std::time::Duration;

mod acquire;
mod error;
mod guard;

pub use error::LockError;
pub use guard::LockGuard;


/// Lock flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// One holder at a time (store writes)
    Exclusive,
    /// Any number of holders, excluded by `Exclusive` (store reads)
    Shared,
}

/// Acquire an exclusive lock on `lock_path`, retrying until `timeout`
///
/// Parent directories are created as needed. `description` names the
/// operation in timeout errors and wait messages.
///
/// ```no_run
/// use cardsmith_core::lock::acquire_lock;
/// use std::path::Path;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let guard = acquire_lock(Path::new(".cardsmith/fields.lock"), Duration::from_secs(5), "sync")?;
/// // write the store
/// drop(guard);
/// # Ok(())
/// # }
/// ```
pub fn acquire_lock(
    lock_path: &Path,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    acquire::acquire_with_retry(lock_path, LockMode::Exclusive, timeout, description)
}

/// Acquire a shared lock on `lock_path`, retrying until `timeout`
pub fn acquire_shared_lock(
    lock_path: &Path,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    acquire::acquire_with_retry(lock_path, LockMode::Shared, timeout, description)
}
