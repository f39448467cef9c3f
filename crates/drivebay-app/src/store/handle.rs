//! Shared access to the VM configuration
//!
//! [`ConfigHandle`] is cheap to clone and is passed to busy tasks, which run
//! on tokio's blocking pool. Readers (rendering, key handling) take a short
//! read lock and never wait for disk I/O: a transaction mutates a private
//! copy, persists it, and only then swaps it in.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use drivebay_core::prelude::*;
use tokio::sync::watch;

use super::{save_vm_config, VmConfiguration};

/// Shared, observable VM configuration
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    current: Arc<RwLock<VmConfiguration>>,
    /// Serializes transactions so concurrent writers cannot lose updates
    writer: Arc<Mutex<()>>,
    revision: Arc<watch::Sender<u64>>,
    path: Option<Arc<PathBuf>>,
}

impl ConfigHandle {
    /// Configuration that lives only in memory
    pub fn in_memory(config: VmConfiguration) -> Self {
        Self::build(config, None)
    }

    /// Configuration saved to `path` after every successful transaction
    pub fn persistent(config: VmConfiguration, path: impl Into<PathBuf>) -> Self {
        Self::build(config, Some(Arc::new(path.into())))
    }

    fn build(config: VmConfiguration, path: Option<Arc<PathBuf>>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            current: Arc::new(RwLock::new(config)),
            writer: Arc::new(Mutex::new(())),
            revision: Arc::new(revision),
            path,
        }
    }

    /// Where the configuration is persisted, if anywhere
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref().map(PathBuf::as_path)
    }

    /// Run `f` against the current configuration
    pub fn read<R>(&self, f: impl FnOnce(&VmConfiguration) -> R) -> Result<R> {
        let guard = self
            .current
            .read()
            .map_err(|_| Error::configuration("configuration lock poisoned"))?;
        Ok(f(&guard))
    }

    /// Owned copy of the current configuration
    pub fn snapshot(&self) -> Result<VmConfiguration> {
        self.read(VmConfiguration::clone)
    }

    /// Apply `f` atomically.
    ///
    /// `f` works on a copy. The copy replaces the current configuration only
    /// if `f` succeeds and, for persistent handles, the save succeeds. On any
    /// failure the configuration is left exactly as it was and no change
    /// notification is sent.
    pub fn transact<R>(&self, f: impl FnOnce(&mut VmConfiguration) -> Result<R>) -> Result<R> {
        let _writer = self
            .writer
            .lock()
            .map_err(|_| Error::configuration("configuration writer lock poisoned"))?;

        let mut working = self.snapshot()?;
        let output = f(&mut working)?;

        if let Some(path) = &self.path {
            save_vm_config(path, &working)?;
        }

        {
            let mut current = self
                .current
                .write()
                .map_err(|_| Error::configuration("configuration lock poisoned"))?;
            *current = working;
        }

        self.revision.send_modify(|r| *r += 1);
        trace!("Configuration revision {}", self.revision());
        Ok(output)
    }

    /// Revision counter, bumped once per committed transaction
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
