//! Shared handle to the current snapshot with whole-snapshot reload.

use crate::data::{load_dir, LoadError};
use crate::schema::WorkforceSnapshot;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

/// Holds the active [`WorkforceSnapshot`].
///
/// Readers take an `Arc` to the snapshot and keep querying it even if a reload swaps in a
/// newer one meanwhile. A swap replaces all six tables at once.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<WorkforceSnapshot>>,
}

impl SnapshotStore {
    pub fn new(snapshot: WorkforceSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, LoadError> {
        load_dir(dir).map(Self::new)
    }

    pub fn current(&self) -> Arc<WorkforceSnapshot> {
        // The guarded value is only ever a whole Arc, so a poisoned lock still holds a
        // consistent snapshot.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swap in `snapshot`, returning the one it replaced.
    pub fn replace(&self, snapshot: WorkforceSnapshot) -> Arc<WorkforceSnapshot> {
        let next = Arc::new(snapshot);
        let counts = next.counts();
        let previous = {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, next)
        };
        info!(
            employees = counts.employees,
            projects = counts.projects,
            billing = counts.billing,
            "workforce snapshot replaced"
        );
        previous
    }

    /// Load a complete snapshot from `dir` and swap it in.
    ///
    /// On failure the current snapshot stays active and the error is returned.
    pub fn reload_from_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Arc<WorkforceSnapshot>, LoadError> {
        match load_dir(dir.as_ref()) {
            Ok(snapshot) => {
                self.replace(snapshot);
                Ok(self.current())
            }
            Err(error) => {
                warn!(dir = %dir.as_ref().display(), %error, "reload failed, keeping current snapshot");
                Err(error)
            }
        }
    }
}
