//! Spacing tokens for theming
//!
//! Three scales, all in logical pixels:
//! - `stack`: vertical rhythm between stacked elements
//! - `inline`: horizontal gaps between inline siblings
//! - `inset`: padding inside a container

/// Complete set of spacing tokens
#[derive(Clone, Debug)]
pub struct SpacingTokens {
    // Stack scale
    pub stack_nano: f32,
    pub stack_xxxs: f32,
    pub stack_xxs: f32,
    pub stack_xs: f32,
    pub stack_sm: f32,

    // Inline scale
    pub inline_nano: f32,
    pub inline_xxs: f32,

    // Inset scale
    pub inset_nano: f32,
    pub inset_xs: f32,
    pub inset_sm: f32,
    /// Squished inset: (vertical, horizontal)
    pub inset_squish_nano: (f32, f32),
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            stack_nano: 4.0,
            stack_xxxs: 8.0,
            stack_xxs: 16.0,
            stack_xs: 24.0,
            stack_sm: 32.0,
            inline_nano: 8.0,
            inline_xxs: 16.0,
            inset_nano: 8.0,
            inset_xs: 16.0,
            inset_sm: 24.0,
            inset_squish_nano: (8.0, 16.0),
        }
    }
}
