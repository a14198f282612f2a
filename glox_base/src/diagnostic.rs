//! A module for passing diagnostics from a toolchain stage to whoever drives it.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// Represents a sink that every stage reports its diagnostics to.
///
/// Reporting never aborts the stage; the handler decides what a diagnostic means for the
/// caller (print it, collect it, count it, or drop it).
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a struct that implements [`Handler`] by storing all diagnostics in a vector, in the order
/// they were received.
#[derive(Debug)]
pub struct Storage<T: Send + Sync> {
    diagnostics: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the received diagnostics.
    pub fn into_vec(self) -> Vec<T> {
        self.diagnostics
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a read guard over the received diagnostics.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> {
        self.diagnostics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` if no diagnostic has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.as_vec().is_empty() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) {
        self.diagnostics
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.into());
    }
}

/// Is a struct that implements [`Handler`] by discarding every diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _diagnostic: T) {}
}
