//! The method-consumption side-channel.

use chassis_core::TypeId;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;

/// Records which companion methods were bound to facets.
///
/// Written by the companion factories during builds, read by the
/// validation pass: a recognized companion name that was never consumed
/// is an orphan. Safe for concurrent builds of independent types.
#[derive(Debug, Default)]
pub struct ConsumedMethods {
    inner: Mutex<FxHashSet<(TypeId, String)>>,
}

impl ConsumedMethods {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a method as consumed by a facet binding.
    pub fn consume(&self, owner: TypeId, method: &str) {
        self.inner.lock().insert((owner, method.to_string()));
    }

    /// Returns true if the method was bound.
    pub fn is_consumed(&self, owner: TypeId, method: &str) -> bool {
        self.inner.lock().contains(&(owner, method.to_string()))
    }

    /// Snapshot the consumed set.
    pub fn snapshot(&self) -> FxHashSet<(TypeId, String)> {
        self.inner.lock().clone()
    }
}
