//! Base widget trait and types

use std::sync::atomic::{AtomicU64, Ordering};

use verda_core::events::Event;

/// Unique identifier for a widget instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id used for event targeting and pointer grabs
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Whether the widget rejects interaction
    fn is_disabled(&self) -> bool;

    /// Handle an event forwarded by the host
    fn handle_event(&mut self, event: &Event);
}
