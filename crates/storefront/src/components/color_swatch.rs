//! Color variant picker.

use electromart_core::ColorId;

use crate::catalog::ColorOption;

/// Swatch diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwatchSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SwatchSize {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Sm => "swatch-sm",
            Self::Md => "swatch-md",
            Self::Lg => "swatch-lg",
        }
    }
}

/// One rendered swatch.
#[derive(Debug, Clone)]
pub struct Swatch {
    pub id: ColorId,
    pub name: String,
    pub hex_color: String,
    pub is_available: bool,
    pub is_selected: bool,
    pub aria_label: String,
    /// Link that selects this color; `None` when unavailable.
    pub href: Option<String>,
}

/// A row of color swatches with one selected.
#[derive(Debug, Clone)]
pub struct ColorSwatch {
    pub swatches: Vec<Swatch>,
    pub size: SwatchSize,
}

impl ColorSwatch {
    /// Build the picker. `href_for` produces the selection link for a color.
    #[must_use]
    pub fn new(
        options: &[ColorOption],
        selected: Option<&ColorId>,
        href_for: impl Fn(&ColorId) -> String,
    ) -> Self {
        let swatches = options
            .iter()
            .map(|option| {
                let aria_label = if option.is_available {
                    option.name.clone()
                } else {
                    format!("{} (unavailable)", option.name)
                };
                Swatch {
                    id: option.id.clone(),
                    name: option.name.clone(),
                    hex_color: option.hex_color.clone(),
                    is_available: option.is_available,
                    is_selected: selected == Some(&option.id),
                    aria_label,
                    href: option.is_available.then(|| href_for(&option.id)),
                }
            })
            .collect();

        Self {
            swatches,
            size: SwatchSize::default(),
        }
    }

    #[must_use]
    pub const fn size(mut self, size: SwatchSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Name of the selected color, if any.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.swatches
            .iter()
            .find(|s| s.is_selected)
            .map(|s| s.name.as_str())
    }
}

/// Apply a selection request.
///
/// Selecting an unavailable or unknown color leaves `current` unchanged.
#[must_use]
pub fn select(options: &[ColorOption], current: Option<&ColorId>, requested: &str) -> Option<ColorId> {
    options
        .iter()
        .find(|o| o.id.as_str() == requested && o.is_available)
        .map(|o| o.id.clone())
        .or_else(|| current.cloned())
}

/// The first available color, used when nothing has been chosen yet.
#[must_use]
pub fn default_selection(options: &[ColorOption]) -> Option<ColorId> {
    options
        .iter()
        .find(|o| o.is_available)
        .map(|o| o.id.clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn options() -> Vec<ColorOption> {
        [("black", true), ("silver", true), ("gold", false)]
            .into_iter()
            .map(|(id, is_available)| ColorOption {
                id: ColorId::new(id),
                name: id.to_uppercase(),
                hex_color: "#000000".to_string(),
                is_available,
            })
            .collect()
    }

    #[test]
    fn test_select_available() {
        let black = ColorId::new("black");
        let selected = select(&options(), Some(&black), "silver");
        assert_eq!(selected.unwrap().as_str(), "silver");
    }

    #[test]
    fn test_select_unavailable_is_noop() {
        let black = ColorId::new("black");
        assert_eq!(select(&options(), Some(&black), "gold"), Some(black.clone()));
        assert_eq!(select(&options(), Some(&black), "purple"), Some(black));
        assert_eq!(select(&options(), None, "gold"), None);
    }

    #[test]
    fn test_default_selection() {
        assert_eq!(default_selection(&options()).unwrap().as_str(), "black");
        assert_eq!(default_selection(&[]), None);
    }

    #[test]
    fn test_view() {
        let silver = ColorId::new("silver");
        let picker = ColorSwatch::new(&options(), Some(&silver), |id| format!("?color={id}"));

        assert_eq!(picker.selected_name(), Some("SILVER"));
        let gold = picker.swatches.iter().find(|s| s.id.as_str() == "gold").unwrap();
        assert_eq!(gold.aria_label, "GOLD (unavailable)");
        assert!(gold.href.is_none());

        let black = picker.swatches.first().unwrap();
        assert_eq!(black.href.as_deref(), Some("?color=black"));
        assert!(!black.is_selected);
    }

    #[test]
    fn test_size_class() {
        let picker = ColorSwatch::new(&options(), None, |id| id.to_string());
        assert_eq!(picker.size.css_class(), "swatch-md");
        assert_eq!(picker.size(SwatchSize::Lg).size.css_class(), "swatch-lg");
    }
}
