//! The Verda theme
//!
//! A single static token set. The palette is a warm-neutral base with a
//! brand green primary ramp, mirroring the product design language the
//! tokens were drawn from.

use crate::tokens::*;

/// Verda palette constants
pub mod palette {
    use verda_core::Color;

    // Base
    pub const WHITE: Color = Color::from_hex(0xFFFFFF);
    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const INK: Color = Color::from_hex(0x2F3A44);

    // Neutral ramp
    pub const NEUTRAL_0: Color = Color::from_hex(0x14181C);
    pub const NEUTRAL_40: Color = Color::from_hex(0x5B6066);
    pub const NEUTRAL_70: Color = Color::from_hex(0xA2A6AB);
    pub const NEUTRAL_80: Color = Color::from_hex(0xC4C7CA);
    pub const NEUTRAL_90: Color = Color::from_hex(0xE1E3E5);
    pub const NEUTRAL_95: Color = Color::from_hex(0xF0F1F2);
    pub const NEUTRAL_100: Color = Color::from_hex(0xFFFFFF);
    pub const NEUTRAL_SECONDARY_90: Color = Color::from_hex(0xEEECEA);

    // Primary ramp (brand green)
    pub const PRIMARY_30: Color = Color::from_hex(0x265200);
    pub const PRIMARY_40: Color = Color::from_hex(0x326B00);
    pub const PRIMARY_50: Color = Color::from_hex(0x3E8500);
    pub const PRIMARY_60: Color = Color::from_hex(0x62A60A);
    pub const PRIMARY_90: Color = Color::from_hex(0xEAF5DC);

    // Feedback
    pub const SUCCESS_50: Color = Color::from_hex(0x1E7B34);
    pub const WARNING_50: Color = Color::from_hex(0xC98600);
    pub const ERROR_50: Color = Color::from_hex(0xD93025);
    pub const ACCESSIBILITY_80: Color = Color::from_hex(0x4095BF);

    /// Assemble the full color token set from the palette
    pub fn color_tokens() -> crate::tokens::ColorTokens {
        crate::tokens::ColorTokens {
            base_white: WHITE,
            base_black: BLACK,
            base_ink: INK,
            neutral_0: NEUTRAL_0,
            neutral_40: NEUTRAL_40,
            neutral_70: NEUTRAL_70,
            neutral_80: NEUTRAL_80,
            neutral_90: NEUTRAL_90,
            neutral_95: NEUTRAL_95,
            neutral_100: NEUTRAL_100,
            neutral_secondary_90: NEUTRAL_SECONDARY_90,
            primary_30: PRIMARY_30,
            primary_40: PRIMARY_40,
            primary_50: PRIMARY_50,
            primary_60: PRIMARY_60,
            primary_90: PRIMARY_90,
            feedback_success_50: SUCCESS_50,
            feedback_warning_50: WARNING_50,
            feedback_error_50: ERROR_50,
            feedback_accessibility_80: ACCESSIBILITY_80,
        }
    }
}

/// Bundle of all token sets
#[derive(Clone, Debug, Default)]
pub struct Theme {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub shadows: ShadowTokens,
    pub opacities: OpacityTokens,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_verda_preset() {
        let theme = Theme::default();
        assert_eq!(theme.colors.primary_50, palette::PRIMARY_50);
        assert_eq!(theme.radii.md, 8.0);
        assert_eq!(theme.opacities.disabled, 0.6);
    }
}
