//! Scoped pointer capture for drag gestures
//!
//! While a drag is active the dragging widget must receive pointer-move and
//! pointer-up events from the whole document, not just from its own bounds.
//! The host routes global pointer input to whichever widget currently holds
//! the grab.
//!
//! A grab is held through a [`PointerGrab`] guard and released on drop, so
//! release happens both on normal drag end and when a widget is torn down
//! mid-drag. Release is unconditional, never best-effort.

use std::sync::{Arc, Mutex};

#[derive(Default)]
struct GrabState {
    /// (token, owner widget id) of the active grab, if any
    current: Option<(u64, u64)>,
    next_token: u64,
}

/// Shared registry of the active pointer grab
///
/// Cheap to clone; all clones observe the same grab.
#[derive(Clone, Default)]
pub struct GrabRegistry {
    state: Arc<Mutex<GrabState>>,
}

impl GrabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the pointer grab for a widget
    ///
    /// Any previously active grab is displaced, matching how a new pointer
    /// gesture supersedes a stale one.
    pub fn acquire(&self, owner: u64) -> PointerGrab {
        let mut state = self.state.lock().unwrap();
        state.next_token += 1;
        let token = state.next_token;
        if let Some((_, old_owner)) = state.current.replace((token, owner)) {
            tracing::trace!(old_owner, owner, "pointer grab displaced");
        } else {
            tracing::trace!(owner, "pointer grab acquired");
        }
        PointerGrab {
            state: self.state.clone(),
            token,
            owner,
        }
    }

    /// Widget id of the current grab holder, if any
    pub fn owner(&self) -> Option<u64> {
        self.state.lock().unwrap().current.map(|(_, owner)| owner)
    }

    /// Whether any widget currently holds the grab
    pub fn is_held(&self) -> bool {
        self.state.lock().unwrap().current.is_some()
    }
}

/// RAII guard for an active pointer grab
///
/// Dropping the guard releases the grab, unless a newer grab has already
/// displaced it.
pub struct PointerGrab {
    state: Arc<Mutex<GrabState>>,
    token: u64,
    owner: u64,
}

impl PointerGrab {
    /// Widget id this grab was acquired for
    pub fn owner(&self) -> u64 {
        self.owner
    }
}

impl Drop for PointerGrab {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap();
        if let Some((token, _)) = state.current {
            if token == self.token {
                state.current = None;
                tracing::trace!(owner = self.owner, "pointer grab released");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let registry = GrabRegistry::new();
        assert!(!registry.is_held());

        let grab = registry.acquire(42);
        assert_eq!(registry.owner(), Some(42));

        drop(grab);
        assert!(!registry.is_held());
    }

    #[test]
    fn test_displaced_grab_release_is_noop() {
        let registry = GrabRegistry::new();
        let first = registry.acquire(1);
        let second = registry.acquire(2);
        assert_eq!(registry.owner(), Some(2));

        // Dropping the stale guard must not release the newer grab
        drop(first);
        assert_eq!(registry.owner(), Some(2));

        drop(second);
        assert!(!registry.is_held());
    }

    #[test]
    fn test_clones_share_state() {
        let registry = GrabRegistry::new();
        let view = registry.clone();
        let _grab = registry.acquire(9);
        assert_eq!(view.owner(), Some(9));
    }
}
