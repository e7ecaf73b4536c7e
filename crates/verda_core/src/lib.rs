//! Verda Core Runtime
//!
//! This crate provides the foundational primitives for the Verda widget
//! library:
//!
//! - **Colors**: linear RGBA colors with hex conversion for token output
//! - **Geometry**: rectangles used for hit testing and track measurement
//! - **Events**: unified pointer/keyboard event model
//! - **State machines**: flat statecharts for widget interaction states
//! - **Pointer grabs**: scoped capture of global pointer input during drags

pub mod color;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod grab;

pub use color::Color;
pub use events::{Event, EventType};
pub use fsm::{StateId, StateMachine, Transition};
pub use geometry::Rect;
pub use grab::{GrabRegistry, PointerGrab};
