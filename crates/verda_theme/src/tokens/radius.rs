//! Border radius tokens for theming

/// Complete set of border radius tokens (logical pixels)
///
/// `pill` is an oversized radius that renders any reasonably sized control
/// as a capsule. Fully circular corners ("50%") are a table-level token
/// only, since they have no fixed pixel value.
#[derive(Clone, Debug)]
pub struct RadiusTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub pill: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            sm: 4.0,
            md: 8.0,
            lg: 16.0,
            pill: 500.0,
        }
    }
}
