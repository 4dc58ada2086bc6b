//! A command tree shared between threads.
//!
//! Resolution mutates active state on internal nodes, so passes over one tree
//! must not interleave. `SharedCommand` holds the lock for a whole pass.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::Command;
use crate::resolve::resolver::{DispatchError, Resolution, Resolver};

/// Thread-safe handle to a command tree.
#[derive(Clone)]
pub struct SharedCommand {
    inner: Arc<Mutex<Command>>,
    resolver: Resolver,
}

impl SharedCommand {
    pub fn new(root: Command) -> Self {
        Self::with_resolver(root, Resolver::default())
    }

    pub fn with_resolver(root: Command, resolver: Resolver) -> Self {
        Self {
            inner: Arc::new(Mutex::new(root)),
            resolver,
        }
    }

    /// Run one resolution pass under the lock.
    pub fn resolve(&self, args: &[String]) -> Resolution {
        let mut root = self.inner.lock();
        self.resolver.resolve(&mut root, args)
    }

    /// Run one resolve-and-execute pass under the lock.
    ///
    /// The handler runs while the lock is held.
    pub fn dispatch(&self, args: &[String]) -> Result<Resolution, DispatchError> {
        let mut root = self.inner.lock();
        self.resolver.dispatch(&mut root, args)
    }

    /// Inspect the tree, including the state left by the last pass.
    pub fn with_tree<R>(&self, f: impl FnOnce(&Command) -> R) -> R {
        let root = self.inner.lock();
        f(&root)
    }

    /// Mutate the tree, e.g. to register more commands.
    pub fn with_tree_mut<R>(&self, f: impl FnOnce(&mut Command) -> R) -> R {
        let mut root = self.inner.lock();
        f(&mut root)
    }
}
