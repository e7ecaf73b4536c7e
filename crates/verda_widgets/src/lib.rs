//! Verda Widget Library
//!
//! Core UI components with FSM-driven interactions:
//!
//! - [`Slider`]: range input with pointer drag, click-to-position, and
//!   keyboard stepping
//! - [`Button`]: variant/size-aware push button
//! - [`BoxInput`]: box-style toggle input
//! - [`ColorPalette`]: color token documentation view model
//!
//! Widgets are view-agnostic: each exposes a read model (colors, metrics,
//! interaction state) and consumes [`verda_core::Event`]s forwarded by the
//! host. Rendering is the host's job.

pub mod box_input;
pub mod button;
pub mod palette;
pub mod slider;
pub mod widget;

pub use box_input::{BoxInput, BoxInputSize};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use palette::ColorPalette;
pub use slider::{Slider, SliderConfig, SliderConfigError};
pub use widget::{Widget, WidgetId};
