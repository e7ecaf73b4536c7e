//! Typography tokens for theming

/// Complete set of typography tokens
#[derive(Clone, Debug)]
pub struct TypographyTokens {
    /// Base font stack
    pub font_family_base: &'static str,
    /// Monospace stack used for token values in documentation views
    pub font_family_mono: &'static str,

    // Font sizes (logical pixels)
    pub font_size_xs: f32,
    pub font_size_sm: f32,
    pub font_size_base: f32,
    pub font_size_lg: f32,

    // Font weights
    pub font_weight_regular: u16,
    pub font_weight_medium: u16,
    pub font_weight_semibold: u16,

    // Line heights (unitless multipliers)
    pub line_height_tight: f32,
    pub line_height_base: f32,

    // Letter spacing (logical pixels)
    pub letter_spacing_none: f32,
    pub letter_spacing_sm: f32,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family_base: "Roboto, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            font_family_mono: "'Roboto Mono', SFMono-Regular, Menlo, monospace",
            font_size_xs: 11.0,
            font_size_sm: 14.0,
            font_size_base: 16.0,
            font_size_lg: 20.0,
            font_weight_regular: 400,
            font_weight_medium: 500,
            font_weight_semibold: 600,
            line_height_tight: 1.2,
            line_height_base: 1.5,
            letter_spacing_none: 0.0,
            letter_spacing_sm: 0.2,
        }
    }
}
