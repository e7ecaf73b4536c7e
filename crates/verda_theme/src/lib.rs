//! Verda Theme System
//!
//! Design tokens for the Verda widget library: colors, typography, spacing,
//! border radii, shadows and opacities. Tokens are the atomic values of the
//! design system; widgets read them as typed structs, while the token build
//! pipeline and the palette documentation view consume a flattened
//! [`TokenTable`] keyed by kebab-case path.
//!
//! # Quick start
//!
//! ```rust
//! use verda_theme::Theme;
//!
//! let theme = Theme::default();
//! assert_eq!(theme.colors.primary_50.to_hex_string(), "#3E8500");
//! ```

pub mod table;
pub mod theme;
pub mod tokens;

pub use table::TokenTable;
pub use theme::Theme;
pub use tokens::*;
