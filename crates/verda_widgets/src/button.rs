//! Button widget with FSM-driven interactions
//!
//! Visual states (idle, hovered, pressed) are driven by a state machine;
//! a disabled button gets a machine with no transitions, so no event can
//! move it. Colors and metrics resolve against the theme per variant, size
//! and state.

use verda_core::events::{event_types, Event};
use verda_core::fsm::StateMachine;
use verda_core::Color;
use verda_theme::{Shadow, Theme};

use crate::widget::{Widget, WidgetId};

/// Button states
pub mod states {
    pub const IDLE: u32 = 0;
    pub const HOVERED: u32 = 1;
    pub const PRESSED: u32 = 2;
    pub const DISABLED: u32 = 3;
}

/// Visual treatment variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

/// Size presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// (horizontal padding, vertical padding, minimum height)
    fn metrics(self) -> (f32, f32, f32) {
        match self {
            ButtonSize::Small => (16.0, 8.0, 32.0),
            ButtonSize::Medium => (24.0, 12.0, 44.0),
            ButtonSize::Large => (32.0, 16.0, 56.0),
        }
    }
}

/// Resolved visual read model for a render pass
#[derive(Clone, Debug)]
pub struct ButtonVisual {
    pub bg: Color,
    pub text: Color,
    pub shadow: Option<Shadow>,
    pub corner_radius: f32,
    pub padding: (f32, f32),
    pub min_height: f32,
    /// Set when the button stretches to its container width
    pub max_width: Option<f32>,
    pub font_size: f32,
}

/// Push button widget
pub struct Button {
    id: WidgetId,
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    pill: bool,
    full_width: bool,
    disabled: bool,
    focused: bool,
    fsm: StateMachine,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self::build(label.into(), ButtonVariant::default(), ButtonSize::default(), false)
    }

    fn build(label: String, variant: ButtonVariant, size: ButtonSize, disabled: bool) -> Self {
        Self {
            id: WidgetId::next(),
            label,
            variant,
            size,
            pill: false,
            full_width: false,
            disabled,
            focused: false,
            fsm: Self::create_fsm(disabled),
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Capsule preset: pill corner radius with a compact 40px height
    /// (56px for [`ButtonSize::Large`]) and squished padding. Used for
    /// standalone call-to-action buttons.
    pub fn pill(mut self) -> Self {
        self.pill = true;
        self
    }

    /// Stretch to the container width, capped at [`Button::FULL_WIDTH_MAX`]
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self.fsm = Self::create_fsm(disabled);
        self
    }

    /// Set the click callback
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    fn create_fsm(disabled: bool) -> StateMachine {
        if disabled {
            // Disabled button has no transitions
            StateMachine::builder(states::DISABLED).build()
        } else {
            StateMachine::builder(states::IDLE)
                .on(states::IDLE, event_types::POINTER_ENTER, states::HOVERED)
                .on(states::HOVERED, event_types::POINTER_LEAVE, states::IDLE)
                .on(states::HOVERED, event_types::POINTER_DOWN, states::PRESSED)
                .on(states::PRESSED, event_types::POINTER_UP, states::HOVERED)
                .on(states::PRESSED, event_types::POINTER_LEAVE, states::IDLE)
                .build()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current FSM state (see [`states`])
    pub fn state(&self) -> u32 {
        self.fsm.current_state()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Width cap for full-width buttons
    pub const FULL_WIDTH_MAX: f32 = 336.0;

    /// Resolve colors and metrics for the current state
    pub fn visual(&self, theme: &Theme) -> ButtonVisual {
        let (ph, pv, min_height) = self.size.metrics();
        let mut visual = ButtonVisual {
            bg: Color::TRANSPARENT,
            text: theme.colors.base_ink,
            shadow: None,
            corner_radius: theme.radii.md,
            padding: (ph, pv),
            min_height,
            max_width: self.full_width.then_some(Self::FULL_WIDTH_MAX),
            font_size: theme.typography.font_size_base,
        };

        if self.pill {
            visual.corner_radius = theme.radii.pill;
            if self.size == ButtonSize::Large {
                visual.min_height = 56.0;
                visual.padding = (theme.spacing.inset_sm, 13.0);
            } else {
                visual.min_height = 40.0;
                visual.padding = (theme.spacing.inset_xs, 13.0);
            }
        }

        if self.disabled {
            visual.bg = theme.colors.neutral_secondary_90;
            visual.text = theme.colors.neutral_70;
            return visual;
        }

        if self.variant == ButtonVariant::Primary {
            visual.text = theme.colors.base_white;
            visual.shadow = Some(theme.shadows.level_1.clone());
            visual.bg = match self.fsm.current_state() {
                states::HOVERED => theme.colors.primary_40,
                states::PRESSED => theme.colors.primary_60,
                _ => theme.colors.primary_50,
            };
            if self.fsm.is_in(states::PRESSED) {
                // Ripple: inner ring of the pale primary tint
                visual.shadow = Some(Shadow::inset(
                    0.0,
                    0.0,
                    0.0,
                    2.0,
                    theme.colors.primary_90.with_alpha(0.3),
                ));
            } else if self.focused {
                visual.shadow = Some(theme.shadows.focus_ring.clone());
            }
        }

        visual
    }

    fn fire_click(&mut self) {
        if let Some(callback) = self.on_click.as_mut() {
            callback();
        }
    }
}

impl Widget for Button {
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
            event_types::FOCUS => {
                self.focused = true;
                return;
            }
            event_types::BLUR => {
                self.focused = false;
                return;
            }
            _ => {}
        }

        let old_state = self.fsm.current_state();
        let new_state = self.fsm.send(event.event_type);

        // Click is the pressed -> hovered transition on pointer up
        if old_state == states::PRESSED && new_state == states::HOVERED {
            self.fire_click();
        }
    }
}
