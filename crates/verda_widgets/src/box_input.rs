//! Box-style toggle input
//!
//! A selectable box button used for choice groups. Selection is owned by the
//! caller (the widget reports clicks and renders the `selected` flag it is
//! given); press and focus are ephemeral local state, cleared on pointer-up,
//! pointer-leave and blur.

use verda_core::events::{event_types, Event};
use verda_core::Color;
use verda_theme::Theme;

use crate::widget::{Widget, WidgetId};

/// Size presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxInputSize {
    #[default]
    Xs,
    Sm,
}

impl BoxInputSize {
    /// (height, (vertical padding, horizontal padding), minimum width)
    fn metrics(self, theme: &Theme) -> (f32, (f32, f32), f32) {
        match self {
            BoxInputSize::Xs => (48.0, theme.spacing.inset_squish_nano, 175.0),
            BoxInputSize::Sm => (
                64.0,
                (theme.spacing.inset_sm, theme.spacing.inset_sm),
                140.0,
            ),
        }
    }
}

/// Border treatment for the current state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Resolved visual read model for a render pass
#[derive(Clone, Debug)]
pub struct BoxInputVisual {
    pub bg: Color,
    pub text: Color,
    pub border: Border,
    pub corner_radius: f32,
    pub height: f32,
    pub padding: (f32, f32),
    pub min_width: f32,
}

/// Box-style toggle input widget
pub struct BoxInput {
    id: WidgetId,
    label: String,
    size: BoxInputSize,
    selected: bool,
    disabled: bool,
    pressed: bool,
    focused: bool,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl BoxInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            label: label.into(),
            size: BoxInputSize::default(),
            selected: false,
            disabled: false,
            pressed: false,
            focused: false,
            on_click: None,
        }
    }

    pub fn size(mut self, size: BoxInputSize) -> Self {
        self.size = size;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Update the caller-owned selection flag for the next render
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Border resolution order: disabled, focused+selected, selected, rest
    pub fn border(&self, theme: &Theme) -> Border {
        if self.disabled {
            return Border {
                width: 1.0,
                color: theme.colors.neutral_90,
            };
        }
        if self.focused && self.selected {
            return Border {
                width: 3.0,
                color: theme.colors.feedback_accessibility_80,
            };
        }
        if self.selected {
            return Border {
                width: 2.0,
                color: theme.colors.primary_50,
            };
        }
        Border {
            width: 1.0,
            color: theme.colors.neutral_90,
        }
    }

    /// Resolve colors and metrics for the current state
    pub fn visual(&self, theme: &Theme) -> BoxInputVisual {
        let (height, padding, min_width) = self.size.metrics(theme);
        let (bg, text) = if self.disabled {
            (theme.colors.neutral_95, theme.colors.neutral_70)
        } else {
            (theme.colors.base_white, theme.colors.base_ink)
        };
        BoxInputVisual {
            bg,
            text,
            border: self.border(theme),
            corner_radius: theme.radii.md,
            height,
            padding,
            min_width,
        }
    }
}

impl Widget for BoxInput {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn handle_event(&mut self, event: &Event) {
        if self.disabled {
            return;
        }
        match event.event_type {
            event_types::POINTER_DOWN => self.pressed = true,
            event_types::POINTER_UP => {
                if self.pressed {
                    self.pressed = false;
                    if let Some(callback) = self.on_click.as_mut() {
                        callback();
                    }
                }
            }
            event_types::POINTER_LEAVE => self.pressed = false,
            event_types::FOCUS => self.focused = true,
            event_types::BLUR => self.focused = false,
            _ => {}
        }
    }
}
