//! Color palette documentation view model
//!
//! Groups the theme's color tokens into titled sections of swatches for a
//! token documentation page. Clicking a swatch copies its value; the
//! clipboard itself is the host's concern and is injected as a callback.

use verda_theme::TokenTable;

use crate::widget::WidgetId;

/// A single named color
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    /// Token path without the `color-` prefix
    pub name: String,
    /// CSS value, e.g. `#3E8500`
    pub value: String,
}

/// A titled group of swatches
#[derive(Clone, Debug)]
pub struct PaletteSection {
    pub title: &'static str,
    pub description: &'static str,
    pub swatches: Vec<Swatch>,
}

const SECTIONS: &[(&str, &str, &str)] = &[
    (
        "base",
        "color-base-",
        "Foundation colors: surfaces, text ink, and the brand primary ramp.",
    ),
    (
        "neutral",
        "color-neutral-",
        "Grays for borders, dividers, secondary text, and disabled fills.",
    ),
    (
        "feedback",
        "color-feedback-",
        "Status colors for success, warning, error, and focus indication.",
    ),
];

/// Palette view model over the theme's color tokens
pub struct ColorPalette {
    id: WidgetId,
    sections: Vec<PaletteSection>,
    on_copy: Option<Box<dyn FnMut(&str) + Send>>,
}

impl ColorPalette {
    /// Build sections from a flattened token table
    pub fn from_table(table: &TokenTable) -> Self {
        let sections = SECTIONS
            .iter()
            .map(|(title, prefix, description)| PaletteSection {
                title,
                description,
                swatches: table
                    .prefixed(prefix)
                    .map(|(name, value)| Swatch {
                        name: name.trim_start_matches("color-").to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            id: WidgetId::next(),
            sections,
            on_copy: None,
        }
    }

    /// Inject the host clipboard
    pub fn on_copy<F: FnMut(&str) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_copy = Some(Box::new(callback));
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn sections(&self) -> &[PaletteSection] {
        &self.sections
    }

    /// Copy a swatch's value by token name
    ///
    /// Returns the copied value, or `None` if no such swatch exists.
    pub fn copy_swatch(&mut self, name: &str) -> Option<String> {
        let value = self
            .sections
            .iter()
            .flat_map(|s| s.swatches.iter())
            .find(|sw| sw.name == name)
            .map(|sw| sw.value.clone())?;
        if let Some(callback) = self.on_copy.as_mut() {
            callback(&value);
        }
        tracing::debug!(token = name, "palette swatch copied");
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use verda_theme::Theme;

    fn palette() -> ColorPalette {
        ColorPalette::from_table(&TokenTable::from_theme(&Theme::default()))
    }

    #[test]
    fn test_sections_cover_all_color_tokens() {
        let palette = palette();
        assert_eq!(palette.sections().len(), 3);
        let total: usize = palette.sections().iter().map(|s| s.swatches.len()).sum();
        assert_eq!(total, 20);

        let base = &palette.sections()[0];
        assert_eq!(base.title, "base");
        assert!(base
            .swatches
            .contains(&Swatch {
                name: "base-primary-50".to_string(),
                value: "#3E8500".to_string()
            }));
    }

    #[test]
    fn test_copy_swatch_forwards_to_clipboard() {
        let copied = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = copied.clone();
        let mut palette = palette().on_copy(move |value| {
            sink.lock().unwrap().push(value.to_string());
        });

        let value = palette.copy_swatch("base-primary-50");
        assert_eq!(value.as_deref(), Some("#3E8500"));
        assert_eq!(copied.lock().unwrap().as_slice(), &["#3E8500".to_string()]);
    }

    #[test]
    fn test_copy_unknown_swatch_is_a_no_op() {
        let copied = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = copied.clone();
        let mut palette = palette().on_copy(move |value| {
            sink.lock().unwrap().push(value.to_string());
        });

        assert_eq!(palette.copy_swatch("no-such-token"), None);
        assert!(copied.lock().unwrap().is_empty());
    }
}
