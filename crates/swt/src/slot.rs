//! A shared, rotatable key slot.

use std::sync::{Arc, PoisonError, RwLock};

use log::info;

use crate::engine::Swt;
use crate::error::Result;

/// Holds the current engine for callers on many threads.
///
/// Operations snapshot the current `Arc<Swt>` and release the lock before
/// signing, so rotation swaps a whole engine at once and never waits on
/// cryptographic work.
#[derive(Debug)]
pub struct KeySlot {
    current: RwLock<Arc<Swt>>,
}

impl KeySlot {
    pub fn new(engine: Swt) -> Self {
        Self {
            current: RwLock::new(Arc::new(engine)),
        }
    }

    /// Snapshot of the engine in use right now.
    pub fn current(&self) -> Arc<Swt> {
        // The guarded value is a whole Arc, so a poisoned lock still holds a consistent engine.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install `engine` and return the one it replaced.
    pub fn replace(&self, engine: Swt) -> Arc<Swt> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(engine))
    }

    /// Derive a new key from `secret` and swap it in.
    ///
    /// The config of the current engine carries over. On error the slot is unchanged.
    pub fn rekey(&self, secret: &[u8]) -> Result<()> {
        // Derive under the write guard so a concurrent `replace` is never overwritten
        // with an engine built from its predecessor's config.
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.rekeyed(secret)?;
        *guard = Arc::new(next);
        drop(guard);

        info!("key slot rotated");
        Ok(())
    }

    pub fn issue(&self, payload: &[u8]) -> Result<String> {
        self.current().issue(payload)
    }

    pub fn verify(&self, token: &str) -> Result<()> {
        self.current().verify(token)
    }

    pub fn open(&self, token: &str) -> Result<Vec<u8>> {
        self.current().open(token)
    }
}
