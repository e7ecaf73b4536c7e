//! Shadow tokens for theming

use verda_core::Color;

/// A box shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
    /// Inset shadows render inside the border box (used for focus rings)
    pub inset: bool,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
            inset: false,
        }
    }

    pub const fn inset(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
            inset: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
            inset: false,
        }
    }

    /// Format as a CSS `box-shadow` value
    pub fn to_css_string(&self) -> String {
        let rgba = format!(
            "rgba({}, {}, {}, {})",
            (self.color.r * 255.0).round() as u8,
            (self.color.g * 255.0).round() as u8,
            (self.color.b * 255.0).round() as u8,
            self.color.a
        );
        let mut css = format!(
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, rgba
        );
        if self.inset {
            css.push_str(" inset");
        }
        css
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug)]
pub struct ShadowTokens {
    pub level_1: Shadow,
    pub level_2: Shadow,
    pub level_3: Shadow,
    /// Keyboard focus indicator ring
    pub focus_ring: Shadow,
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            level_1: Shadow::new(0.0, 2.0, 4.0, 0.0, Color::rgba(0.0, 0.0, 0.0, 0.1)),
            level_2: Shadow::new(0.0, 4.0, 8.0, 0.0, Color::rgba(0.0, 0.0, 0.0, 0.12)),
            level_3: Shadow::new(0.0, 8.0, 16.0, 0.0, Color::rgba(0.0, 0.0, 0.0, 0.14)),
            focus_ring: Shadow::inset(0.0, 0.0, 0.0, 3.0, Color::from_hex(0x4095BF)),
        }
    }
}
