//! Liveness flag tying async fetches to a component's mount scope.
//!
//! A page spawns local tasks that outlive nothing: when the owning component
//! is torn down, `on_cleanup` flips the flag and any result that arrives
//! afterwards is dropped instead of being written into disposed signals.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// Create a guard released when the current reactive owner is cleaned up.
    #[must_use]
    pub fn install() -> Self {
        let guard = Self::detached();
        let release = guard.clone();
        on_cleanup(move || release.release());
        guard
    }

    /// Create a guard with no owner; only `release` ends it.
    #[must_use]
    pub fn detached() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` with `value` only while still mounted.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_alive() {
            return false;
        }
        apply(value);
        true
    }
}
