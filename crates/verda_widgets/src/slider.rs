//! Range slider widget
//!
//! Translates pointer and keyboard input into a quantized value within a
//! configured range and notifies observers. Two notification channels exist:
//! `on_change` fires synchronously on every committed mutation (each pointer
//! move, click, or key press), while `on_change_committed` fires once per
//! drag gesture at release, so consumers can defer expensive work until the
//! gesture settles.
//!
//! While a drag is active the slider holds a [`PointerGrab`]; the host routes
//! document-level pointer events to the grab holder. The grab is released
//! when the gesture ends or the slider is dropped mid-drag, whichever comes
//! first.

use thiserror::Error;

use verda_core::events::{event_types, Event, EventData, KeyCode};
use verda_core::{GrabRegistry, PointerGrab, Rect};

use crate::widget::{Widget, WidgetId};

/// Callback receiving a slider value
pub type ValueCallback = Box<dyn FnMut(f64) + Send>;

/// Configuration rejected at slider construction
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SliderConfigError {
    #[error("slider range is empty: min ({min}) must be less than max ({max})")]
    EmptyRange { min: f64, max: f64 },
    #[error("slider step must be positive, got {0}")]
    NonPositiveStep(f64),
}

/// Slider configuration (immutable per instance)
#[derive(Clone, Debug)]
pub struct SliderConfig {
    /// Lower bound of the range
    pub min: f64,
    /// Upper bound of the range, must exceed `min`
    pub max: f64,
    /// Quantization unit, must be positive
    pub step: f64,
    /// Whether the slider rejects all interaction
    pub disabled: bool,
    /// Initial value when uncontrolled (defaults to `min`)
    pub default_value: Option<f64>,
    /// Label text for the lower bound (falls back to the numeric bound)
    pub min_label: Option<String>,
    /// Label text for the upper bound (falls back to the numeric bound)
    pub max_label: Option<String>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            disabled: false,
            default_value: None,
            min_label: None,
            max_label: None,
        }
    }
}

impl SliderConfig {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Default::default()
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn min_label(mut self, label: impl Into<String>) -> Self {
        self.min_label = Some(label.into());
        self
    }

    pub fn max_label(mut self, label: impl Into<String>) -> Self {
        self.max_label = Some(label.into());
        self
    }

    /// Check the caller contract: `min < max`, `step > 0`
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        if !(self.min < self.max) {
            return Err(SliderConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.step > 0.0) {
            return Err(SliderConfigError::NonPositiveStep(self.step));
        }
        Ok(())
    }
}

/// Ephemeral per-instance interaction state
#[derive(Clone, Copy, Debug, Default)]
pub struct SliderState {
    /// Current value; a mirror only when the slider is controlled
    pub value: f64,
    /// True only while a pointer-drag gesture is active
    pub dragging: bool,
    /// True only while the control holds input focus
    pub focused: bool,
}

/// Accessibility read model (role "slider")
#[derive(Clone, Debug, PartialEq)]
pub struct SliderAccessibility {
    pub role: &'static str,
    pub value_now: f64,
    pub value_min: f64,
    pub value_max: f64,
    pub disabled: bool,
}

/// Range slider widget
pub struct Slider {
    id: WidgetId,
    config: SliderConfig,
    state: SliderState,
    /// Externally supplied authoritative value (controlled mode)
    controlled: Option<f64>,
    /// Track rectangle in document space, updated by the host on layout
    track: Rect,
    grabs: GrabRegistry,
    grab: Option<PointerGrab>,
    on_change: Option<ValueCallback>,
    on_change_committed: Option<ValueCallback>,
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("controlled", &self.controlled)
            .field("track", &self.track)
            .field("grab", &self.grab.is_some())
            .finish_non_exhaustive()
    }
}

impl Slider {
    /// Track size of the reference design, used until the host measures
    const DEFAULT_TRACK: Rect = Rect::new(0.0, 0.0, 279.0, 4.0);

    /// Create a slider, rejecting invalid configuration
    pub fn new(config: SliderConfig, grabs: GrabRegistry) -> Result<Self, SliderConfigError> {
        config.validate()?;
        let initial = config.default_value.unwrap_or(config.min);
        Ok(Self {
            id: WidgetId::next(),
            state: SliderState {
                value: initial.clamp(config.min, config.max),
                dragging: false,
                focused: false,
            },
            controlled: None,
            track: Self::DEFAULT_TRACK,
            grabs,
            grab: None,
            on_change: None,
            on_change_committed: None,
            config,
        })
    }

    /// Set the change callback (fires on every committed mutation)
    pub fn on_change<F: FnMut(f64) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the commit callback (fires once per drag gesture, at release)
    pub fn on_change_committed<F: FnMut(f64) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_change_committed = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current value: the external value when controlled, internal otherwise
    pub fn value(&self) -> f64 {
        self.controlled.unwrap_or(self.state.value)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Sync the externally supplied value for this cycle
    ///
    /// While `Some`, the external value is ground truth and interaction
    /// never writes internal storage; it only reports through `on_change`.
    /// Internal storage becomes a mirror of the synced value.
    pub fn sync_controlled(&mut self, value: Option<f64>) {
        self.controlled = value;
        if let Some(v) = value {
            self.state.value = v;
        }
    }

    /// Update the track rectangle after layout
    pub fn set_track_rect(&mut self, track: Rect) {
        self.track = track;
    }

    pub fn track_rect(&self) -> Rect {
        self.track
    }

    /// Fill percentage for rendering: `(value - min) / (max - min) * 100`
    ///
    /// Well-defined because construction requires `max > min`.
    pub fn percentage(&self) -> f64 {
        (self.value() - self.config.min) / (self.config.max - self.config.min) * 100.0
    }

    /// Lower-bound label, falling back to the numeric bound
    pub fn min_label(&self) -> String {
        self.config
            .min_label
            .clone()
            .unwrap_or_else(|| fmt_value(self.config.min))
    }

    /// Upper-bound label, falling back to the numeric bound
    pub fn max_label(&self) -> String {
        self.config
            .max_label
            .clone()
            .unwrap_or_else(|| fmt_value(self.config.max))
    }

    /// Accessibility attributes for the host to mirror on every render
    pub fn accessibility(&self) -> SliderAccessibility {
        SliderAccessibility {
            role: "slider",
            value_now: self.value(),
            value_min: self.config.min,
            value_max: self.config.max,
            disabled: self.config.disabled,
        }
    }

    /// Map a document-space x position on the track to a raw (unquantized)
    /// value. Pure; positions beyond the track clamp to the bounds.
    pub fn value_from_position(&self, client_x: f64, track: Rect) -> f64 {
        let p = ((client_x - track.left()) / track.width).clamp(0.0, 1.0);
        self.config.min + p * (self.config.max - self.config.min)
    }

    /// Clamp into range, then snap to the nearest step multiple
    ///
    /// Rounding is anchored at zero, not at `min`: `round(clamped/step)*step`.
    /// For non-zero minima this can land off the `min + k*step` grid; the
    /// behavior is pinned because changing it changes observable output.
    pub fn quantize(&self, raw: f64) -> f64 {
        let clamped = raw.clamp(self.config.min, self.config.max);
        (clamped / self.config.step).round() * self.config.step
    }

    /// Begin a drag gesture at a pointer position (click-to-position)
    ///
    /// Commits a value immediately and acquires the pointer grab. Silently
    /// ignored when disabled.
    pub fn begin_drag(&mut self, client_x: f64) {
        if self.config.disabled {
            return;
        }
        self.commit_from_pointer(client_x);
        self.state.dragging = true;
        self.grab = Some(self.grabs.acquire(self.id.raw()));
        tracing::trace!(slider = self.id.raw(), "drag started");
    }

    /// Recompute and commit the value for a pointer movement
    ///
    /// Every reported movement is processed; there is no throttling.
    pub fn continue_drag(&mut self, client_x: f64) {
        if self.config.disabled || !self.state.dragging {
            return;
        }
        self.commit_from_pointer(client_x);
    }

    /// End the active drag gesture
    ///
    /// Clears the dragging flag, releases the grab, and fires the commit
    /// notification with the final value. A no-op when not dragging, so the
    /// commit notification fires exactly once per gesture.
    pub fn end_drag(&mut self) {
        if !self.state.dragging {
            return;
        }
        self.state.dragging = false;
        self.grab = None;
        let value = self.value();
        if let Some(callback) = self.on_change_committed.as_mut() {
            callback(value);
        }
        tracing::trace!(slider = self.id.raw(), value, "drag committed");
    }

    /// Apply a keyboard key to the current value
    ///
    /// Arrows step by `step`, PageUp/PageDown by `10 * step`, Home/End jump
    /// to the bounds. The result is clamped but not re-quantized; stepping
    /// preserves alignment when the starting value is aligned. Unrecognized
    /// keys return `None` without side effect.
    pub fn apply_key(&mut self, key: KeyCode) -> Option<f64> {
        if self.config.disabled {
            return None;
        }
        let (min, max, step) = (self.config.min, self.config.max, self.config.step);
        let current = self.value();
        let new_value = match key {
            KeyCode::RIGHT | KeyCode::UP => (current + step).min(max),
            KeyCode::LEFT | KeyCode::DOWN => (current - step).max(min),
            KeyCode::HOME => min,
            KeyCode::END => max,
            KeyCode::PAGE_UP => (current + step * 10.0).min(max),
            KeyCode::PAGE_DOWN => (current - step * 10.0).max(min),
            _ => return None,
        };
        self.commit(new_value);
        Some(new_value)
    }

    /// Set the focus flag (silently ignored when disabled)
    pub fn set_focused(&mut self, focused: bool) {
        if self.config.disabled {
            return;
        }
        self.state.focused = focused;
    }

    fn commit_from_pointer(&mut self, client_x: f64) {
        let raw = self.value_from_position(client_x, self.track);
        let value = self.quantize(raw);
        self.commit(value);
    }

    /// Store the value (when uncontrolled) and fire the change notification
    fn commit(&mut self, value: f64) {
        if self.controlled.is_none() {
            self.state.value = value;
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }
}

impl Widget for Slider {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    fn handle_event(&mut self, event: &Event) {
        match (event.event_type, &event.data) {
            (event_types::POINTER_DOWN, EventData::Pointer { x, .. }) => self.begin_drag(*x),
            (event_types::POINTER_MOVE, EventData::Pointer { x, .. }) => self.continue_drag(*x),
            (event_types::POINTER_UP, _) => self.end_drag(),
            // The pointer leaving the document ends the gesture like a release
            (event_types::POINTER_LEAVE, _) => self.end_drag(),
            (event_types::FOCUS, _) => self.set_focused(true),
            (event_types::BLUR, _) => self.set_focused(false),
            (event_types::KEY_DOWN, EventData::Key { key, .. }) => {
                self.apply_key(*key);
            }
            _ => {}
        }
    }
}

fn fmt_value(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn track() -> Rect {
        // Track spanning x = 100..=379 like the reference layout
        Rect::new(100.0, 50.0, 279.0, 4.0)
    }

    fn slider(config: SliderConfig) -> Slider {
        Slider::new(config, GrabRegistry::new()).unwrap()
    }

    fn recording() -> (Arc<Mutex<Vec<f64>>>, impl FnMut(f64) + Send + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        (log, move |v| sink.lock().unwrap().push(v))
    }

    #[test]
    fn test_rejects_empty_range() {
        let err = Slider::new(SliderConfig::new(10.0, 10.0), GrabRegistry::new()).unwrap_err();
        assert_eq!(
            err,
            SliderConfigError::EmptyRange {
                min: 10.0,
                max: 10.0
            }
        );
        assert!(Slider::new(SliderConfig::new(5.0, 1.0), GrabRegistry::new()).is_err());
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let err = Slider::new(SliderConfig::new(0.0, 100.0).step(0.0), GrabRegistry::new())
            .unwrap_err();
        assert_eq!(err, SliderConfigError::NonPositiveStep(0.0));
        assert!(Slider::new(SliderConfig::new(0.0, 100.0).step(-1.0), GrabRegistry::new()).is_err());
    }

    #[test]
    fn test_track_edges_map_to_bounds() {
        let mut s = slider(SliderConfig::new(0.0, 100.0));
        s.set_track_rect(track());

        s.begin_drag(track().left());
        assert_eq!(s.value(), 0.0);

        s.continue_drag(track().right());
        assert_eq!(s.value(), 100.0);

        // Positions beyond the track clamp to the bounds
        s.continue_drag(track().left() - 500.0);
        assert_eq!(s.value(), 0.0);
        s.continue_drag(track().right() + 500.0);
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn test_quarter_track_click_commits_25() {
        let (changes, on_change) = recording();
        let (commits, on_commit) = recording();
        let mut s = slider(SliderConfig::new(0.0, 100.0))
            .on_change(on_change)
            .on_change_committed(on_commit);
        s.set_track_rect(track());

        s.begin_drag(track().left() + track().width * 0.25);
        assert_eq!(s.value(), 25.0);
        assert_eq!(changes.lock().unwrap().as_slice(), &[25.0]);
        assert!(commits.lock().unwrap().is_empty());

        s.end_drag();
        assert_eq!(commits.lock().unwrap().as_slice(), &[25.0]);
    }

    #[test]
    fn test_quantize_stays_in_range() {
        let s = slider(SliderConfig::new(0.0, 100.0).step(7.0));
        let mut raw = 0.0;
        while raw <= 100.0 {
            let q = s.quantize(raw);
            assert!((0.0..=100.0).contains(&q), "quantize({raw}) = {q}");
            raw += 0.5;
        }
        // Out-of-range input clamps before snapping
        assert_eq!(s.quantize(-50.0), 0.0);
        assert_eq!(s.quantize(1000.0), 98.0);
    }

    #[test]
    fn test_quantize_rounds_to_nearest_step() {
        let s = slider(SliderConfig::new(0.0, 100.0).step(10.0));
        assert_eq!(s.quantize(14.9), 10.0);
        assert_eq!(s.quantize(15.0), 20.0);
        assert_eq!(s.quantize(96.0), 100.0);
    }

    #[test]
    fn test_quantize_anchor_is_zero_not_min() {
        // Pins the zero-anchored rounding for non-zero minima: 5 snaps to
        // 6 (a multiple of 3 from zero), not to 5 (the range minimum).
        let s = slider(SliderConfig::new(5.0, 11.0).step(3.0).default_value(5.0));
        assert_eq!(s.quantize(5.0), 6.0);
    }

    #[test]
    fn test_arrow_right_clamps_at_max() {
        let mut s = slider(SliderConfig::new(0.0, 100.0).step(10.0).default_value(95.0));
        assert_eq!(s.apply_key(KeyCode::RIGHT), Some(100.0));
        assert_eq!(s.value(), 100.0);

        // Pressing right at max keeps the value at max
        assert_eq!(s.apply_key(KeyCode::RIGHT), Some(100.0));
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn test_arrow_left_clamps_at_min() {
        let mut s = slider(SliderConfig::new(0.0, 100.0).step(10.0).default_value(5.0));
        assert_eq!(s.apply_key(KeyCode::LEFT), Some(0.0));
        assert_eq!(s.apply_key(KeyCode::DOWN), Some(0.0));
    }

    #[test]
    fn test_home_and_end_are_absolute() {
        let mut s = slider(SliderConfig::new(5.0, 95.0).step(7.0).default_value(40.0));
        assert_eq!(s.apply_key(KeyCode::HOME), Some(5.0));
        assert_eq!(s.value(), 5.0);
        assert_eq!(s.apply_key(KeyCode::END), Some(95.0));
        assert_eq!(s.value(), 95.0);
    }

    #[test]
    fn test_page_keys_step_ten_times() {
        let mut s = slider(SliderConfig::new(0.0, 100.0).step(2.0).default_value(30.0));
        assert_eq!(s.apply_key(KeyCode::PAGE_UP), Some(50.0));
        assert_eq!(s.apply_key(KeyCode::PAGE_DOWN), Some(30.0));

        // Page steps clamp at the bounds too
        s.apply_key(KeyCode::END);
        assert_eq!(s.apply_key(KeyCode::PAGE_UP), Some(100.0));
    }

    #[test]
    fn test_unknown_key_is_a_no_op() {
        let (changes, on_change) = recording();
        let mut s = slider(SliderConfig::new(0.0, 100.0).default_value(42.0)).on_change(on_change);

        assert_eq!(s.apply_key(KeyCode::ENTER), None);
        assert_eq!(s.apply_key(KeyCode::SPACE), None);
        assert_eq!(s.apply_key(KeyCode(0xABCD)), None);
        assert_eq!(s.value(), 42.0);
        assert!(changes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_change_fires_per_move_commit_fires_once() {
        let (changes, on_change) = recording();
        let (commits, on_commit) = recording();
        let mut s = slider(SliderConfig::new(0.0, 100.0))
            .on_change(on_change)
            .on_change_committed(on_commit);
        s.set_track_rect(track());

        s.begin_drag(track().left());
        for i in 1..=10 {
            s.continue_drag(track().left() + f64::from(i) * 10.0);
        }
        s.end_drag();

        assert_eq!(changes.lock().unwrap().len(), 11);
        assert_eq!(commits.lock().unwrap().len(), 1);
        assert!(!s.is_dragging());

        // A second release without a gesture must not re-commit
        s.end_drag();
        assert_eq!(commits.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_moves_without_drag_are_ignored() {
        let (changes, on_change) = recording();
        let mut s = slider(SliderConfig::new(0.0, 100.0)).on_change(on_change);
        s.set_track_rect(track());

        s.continue_drag(track().left() + 50.0);
        assert!(changes.lock().unwrap().is_empty());
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_disabled_rejects_everything_silently() {
        let (changes, on_change) = recording();
        let mut s = slider(SliderConfig::new(0.0, 100.0).disabled(true).default_value(40.0))
            .on_change(on_change);
        s.set_track_rect(track());

        s.begin_drag(track().right());
        s.continue_drag(track().right());
        s.apply_key(KeyCode::END);
        s.apply_key(KeyCode::RIGHT);
        s.set_focused(true);
        s.end_drag();

        assert_eq!(s.value(), 40.0);
        assert!(!s.is_dragging());
        assert!(!s.is_focused());
        assert!(changes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_controlled_value_is_ground_truth() {
        let (changes, on_change) = recording();
        let mut s = slider(SliderConfig::new(0.0, 100.0)).on_change(on_change);
        s.set_track_rect(track());
        s.sync_controlled(Some(30.0));

        // Interaction reports the new value but never overrides the
        // external one
        s.begin_drag(track().right());
        assert_eq!(changes.lock().unwrap().as_slice(), &[100.0]);
        assert_eq!(s.value(), 30.0);

        // The host mirrors the reported value back on the next cycle
        s.sync_controlled(Some(100.0));
        assert_eq!(s.value(), 100.0);
        s.end_drag();

        // Dropping the external value falls back to internal storage
        s.sync_controlled(None);
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn test_grab_spans_the_gesture() {
        let grabs = GrabRegistry::new();
        let mut s = Slider::new(SliderConfig::new(0.0, 100.0), grabs.clone()).unwrap();
        s.set_track_rect(track());

        assert!(!grabs.is_held());
        s.begin_drag(track().left());
        assert_eq!(grabs.owner(), Some(s.id().raw()));

        s.end_drag();
        assert!(!grabs.is_held());
    }

    #[test]
    fn test_teardown_mid_drag_releases_grab() {
        let grabs = GrabRegistry::new();
        let mut s = Slider::new(SliderConfig::new(0.0, 100.0), grabs.clone()).unwrap();
        s.set_track_rect(track());
        s.begin_drag(track().left() + 10.0);
        assert!(grabs.is_held());

        drop(s);
        assert!(!grabs.is_held());
    }

    #[test]
    fn test_percentage_and_labels() {
        let mut s = slider(SliderConfig::new(0.0, 200.0).default_value(50.0));
        assert_eq!(s.percentage(), 25.0);
        assert_eq!(s.min_label(), "0");
        assert_eq!(s.max_label(), "200");

        s = slider(
            SliderConfig::new(0.0, 200.0)
                .min_label("Quiet")
                .max_label("Loud"),
        );
        assert_eq!(s.min_label(), "Quiet");
        assert_eq!(s.max_label(), "Loud");
    }

    #[test]
    fn test_accessibility_snapshot_tracks_state() {
        let mut s = slider(SliderConfig::new(0.0, 100.0).default_value(10.0));
        let a = s.accessibility();
        assert_eq!(a.role, "slider");
        assert_eq!(a.value_now, 10.0);
        assert_eq!(a.value_min, 0.0);
        assert_eq!(a.value_max, 100.0);

        s.apply_key(KeyCode::END);
        assert_eq!(s.accessibility().value_now, 100.0);
    }

    #[test]
    fn test_event_routing() {
        let (commits, on_commit) = recording();
        let mut s = slider(SliderConfig::new(0.0, 100.0)).on_change_committed(on_commit);
        s.set_track_rect(track());
        let id = s.id().raw();

        s.handle_event(&Event::pointer(
            event_types::POINTER_DOWN,
            id,
            track().left() + track().width / 2.0,
            52.0,
        ));
        assert!(s.is_dragging());
        assert_eq!(s.value(), 50.0);

        s.handle_event(&Event::pointer(
            event_types::POINTER_MOVE,
            0,
            track().right(),
            52.0,
        ));
        assert_eq!(s.value(), 100.0);

        s.handle_event(&Event::pointer(event_types::POINTER_UP, 0, 0.0, 0.0));
        assert!(!s.is_dragging());
        assert_eq!(commits.lock().unwrap().as_slice(), &[100.0]);

        s.handle_event(&Event::key(id, KeyCode::HOME));
        assert_eq!(s.value(), 0.0);

        s.handle_event(&Event {
            event_type: event_types::FOCUS,
            target: id,
            data: EventData::None,
            timestamp: 0,
        });
        assert!(s.is_focused());
    }

    #[test]
    fn test_pointer_leave_ends_the_gesture() {
        let (commits, on_commit) = recording();
        let mut s = slider(SliderConfig::new(0.0, 100.0)).on_change_committed(on_commit);
        s.set_track_rect(track());

        s.begin_drag(track().left() + 30.0);
        s.handle_event(&Event::pointer(event_types::POINTER_LEAVE, 0, 0.0, 0.0));
        assert!(!s.is_dragging());
        assert_eq!(commits.lock().unwrap().len(), 1);
    }
}
