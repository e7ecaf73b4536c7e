//! Opacity tokens for theming

/// Complete set of opacity tokens
#[derive(Clone, Debug)]
pub struct OpacityTokens {
    pub disabled: f32,
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self { disabled: 0.6 }
    }
}
