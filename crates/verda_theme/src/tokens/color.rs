//! Color tokens for theming

use verda_core::Color;

/// Complete set of color tokens
///
/// Ramp numbering follows lightness: lower numbers are darker. The neutral
/// ramp carries surfaces, borders and secondary text; the primary ramp is
/// the brand green used by interactive controls.
#[derive(Clone, Debug)]
pub struct ColorTokens {
    // Base colors
    pub base_white: Color,
    pub base_black: Color,
    /// Near-black used for body text on light surfaces
    pub base_ink: Color,

    // Neutral ramp
    pub neutral_0: Color,
    pub neutral_40: Color,
    pub neutral_70: Color,
    pub neutral_80: Color,
    pub neutral_90: Color,
    pub neutral_95: Color,
    pub neutral_100: Color,
    /// Warm neutral used for disabled fills
    pub neutral_secondary_90: Color,

    // Primary ramp
    pub primary_30: Color,
    pub primary_40: Color,
    pub primary_50: Color,
    pub primary_60: Color,
    pub primary_90: Color,

    // Feedback colors
    pub feedback_success_50: Color,
    pub feedback_warning_50: Color,
    pub feedback_error_50: Color,
    /// Focus ring color, tuned for contrast on both light and brand fills
    pub feedback_accessibility_80: Color,
}

impl Default for ColorTokens {
    fn default() -> Self {
        crate::theme::palette::color_tokens()
    }
}
