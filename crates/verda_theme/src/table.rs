//! Flattened token table
//!
//! The typed token structs are what widgets read; the build pipeline and the
//! palette documentation view instead need every token as a
//! `kebab-case-path -> css-value` pair, in a stable order. [`TokenTable`]
//! is that flattening.

use indexmap::IndexMap;

use crate::theme::Theme;

/// Ordered map of token path to CSS value
#[derive(Clone, Debug, Default)]
pub struct TokenTable {
    entries: IndexMap<String, String>,
}

fn fmt_px(value: f32) -> String {
    if value == value.trunc() {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

fn fmt_unitless(value: f32) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl TokenTable {
    /// Flatten a theme into the table
    ///
    /// Entry order is the documentation order: colors, typography, spacing,
    /// radii, shadows, opacity.
    pub fn from_theme(theme: &Theme) -> Self {
        let mut table = Self::default();
        let c = &theme.colors;

        table.push("color-base-white", c.base_white.to_hex_string());
        table.push("color-base-black", c.base_black.to_hex_string());
        table.push("color-base-ink", c.base_ink.to_hex_string());
        table.push("color-base-primary-30", c.primary_30.to_hex_string());
        table.push("color-base-primary-40", c.primary_40.to_hex_string());
        table.push("color-base-primary-50", c.primary_50.to_hex_string());
        table.push("color-base-primary-60", c.primary_60.to_hex_string());
        table.push("color-base-primary-90", c.primary_90.to_hex_string());
        table.push("color-neutral-0", c.neutral_0.to_hex_string());
        table.push("color-neutral-40", c.neutral_40.to_hex_string());
        table.push("color-neutral-70", c.neutral_70.to_hex_string());
        table.push("color-neutral-80", c.neutral_80.to_hex_string());
        table.push("color-neutral-90", c.neutral_90.to_hex_string());
        table.push("color-neutral-95", c.neutral_95.to_hex_string());
        table.push("color-neutral-100", c.neutral_100.to_hex_string());
        table.push(
            "color-neutral-secondary-90",
            c.neutral_secondary_90.to_hex_string(),
        );
        table.push(
            "color-feedback-success-50",
            c.feedback_success_50.to_hex_string(),
        );
        table.push(
            "color-feedback-warning-50",
            c.feedback_warning_50.to_hex_string(),
        );
        table.push(
            "color-feedback-error-50",
            c.feedback_error_50.to_hex_string(),
        );
        table.push(
            "color-feedback-accessibility-80",
            c.feedback_accessibility_80.to_hex_string(),
        );

        let t = &theme.typography;
        table.push("typography-font-family-base", t.font_family_base);
        table.push("typography-font-family-mono", t.font_family_mono);
        table.push("typography-font-size-xs", fmt_px(t.font_size_xs));
        table.push("typography-font-size-sm", fmt_px(t.font_size_sm));
        table.push("typography-font-size-base", fmt_px(t.font_size_base));
        table.push("typography-font-size-lg", fmt_px(t.font_size_lg));
        table.push(
            "typography-font-weight-regular",
            t.font_weight_regular.to_string(),
        );
        table.push(
            "typography-font-weight-medium",
            t.font_weight_medium.to_string(),
        );
        table.push(
            "typography-font-weight-semibold",
            t.font_weight_semibold.to_string(),
        );
        table.push(
            "typography-line-height-tight",
            fmt_unitless(t.line_height_tight),
        );
        table.push(
            "typography-line-height-base",
            fmt_unitless(t.line_height_base),
        );
        table.push("typography-letter-spacing-none", "0");
        table.push("typography-letter-spacing-sm", fmt_px(t.letter_spacing_sm));

        let s = &theme.spacing;
        table.push("spacing-stack-nano", fmt_px(s.stack_nano));
        table.push("spacing-stack-xxxs", fmt_px(s.stack_xxxs));
        table.push("spacing-stack-xxs", fmt_px(s.stack_xxs));
        table.push("spacing-stack-xs", fmt_px(s.stack_xs));
        table.push("spacing-stack-sm", fmt_px(s.stack_sm));
        table.push("spacing-inline-nano", fmt_px(s.inline_nano));
        table.push("spacing-inline-xxs", fmt_px(s.inline_xxs));
        table.push("spacing-inset-nano", fmt_px(s.inset_nano));
        table.push("spacing-inset-xs", fmt_px(s.inset_xs));
        table.push("spacing-inset-sm", fmt_px(s.inset_sm));
        table.push(
            "spacing-inset-squish-nano",
            format!(
                "{} {}",
                fmt_px(s.inset_squish_nano.0),
                fmt_px(s.inset_squish_nano.1)
            ),
        );

        let r = &theme.radii;
        table.push("border-radius-sm", fmt_px(r.sm));
        table.push("border-radius-md", fmt_px(r.md));
        table.push("border-radius-lg", fmt_px(r.lg));
        table.push("border-radius-pill", fmt_px(r.pill));
        // Fully circular corners have no pixel value
        table.push("border-radius-circular", "50%");

        let sh = &theme.shadows;
        table.push("shadow-level-1", sh.level_1.to_css_string());
        table.push("shadow-level-2", sh.level_2.to_css_string());
        table.push("shadow-level-3", sh.level_3.to_css_string());
        table.push("shadow-focus-ring", sh.focus_ring.to_css_string());

        table.push("opacity-disabled", fmt_unitless(theme.opacities.disabled));

        tracing::debug!(tokens = table.len(), "flattened theme into token table");
        table
    }

    fn push(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(name.to_string(), value.into());
    }

    /// Look up a token value by path
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Iterate all tokens in documentation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate tokens whose path starts with a prefix
    pub fn prefixed<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.iter().filter(move |(k, _)| k.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let table = TokenTable::from_theme(&Theme::default());
        assert_eq!(table.get("color-base-primary-50"), Some("#3E8500"));
        assert_eq!(table.get("spacing-stack-nano"), Some("4px"));
        assert_eq!(table.get("border-radius-circular"), Some("50%"));
        assert_eq!(table.get("typography-letter-spacing-sm"), Some("0.2px"));
        assert_eq!(table.get("opacity-disabled"), Some("0.6"));
        assert_eq!(table.get("no-such-token"), None);
    }

    #[test]
    fn test_order_is_stable() {
        let table = TokenTable::from_theme(&Theme::default());
        let names: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(names.first(), Some(&"color-base-white"));
        assert_eq!(names.last(), Some(&"opacity-disabled"));

        // Colors come before typography, typography before spacing
        let color_idx = names.iter().position(|n| n.starts_with("color-")).unwrap();
        let typo_idx = names
            .iter()
            .position(|n| n.starts_with("typography-"))
            .unwrap();
        let spacing_idx = names
            .iter()
            .position(|n| n.starts_with("spacing-"))
            .unwrap();
        assert!(color_idx < typo_idx && typo_idx < spacing_idx);
    }

    #[test]
    fn test_prefixed_filter() {
        let table = TokenTable::from_theme(&Theme::default());
        let colors: Vec<_> = table.prefixed("color-").collect();
        assert_eq!(colors.len(), 20);
        assert!(colors.iter().all(|(k, _)| k.starts_with("color-")));
    }
}
