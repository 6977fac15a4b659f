//! Color theme configuration
//!
//! Colors are raw CSS color values spliced into inline styles, so values that
//! could break out of a declaration are rejected at load time.
//!
//! ```
//! use hoverlab_core::Theme;
//!
//! let theme = Theme::from_toml_str("highlight = \"crimson\"")?;
//! assert_eq!(theme.highlight, "crimson");
//! assert_eq!(theme.rest, "green");
//! # Ok::<(), hoverlab_core::Error>(())
//! ```

use serde::Deserialize;

use crate::error::Error;
use crate::interaction::Paint;
use crate::result::Result;

/// Colors used by derived inline styles
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Label text color at rest
    pub link: String,
    /// Label text color while hovered
    pub link_hover: String,
    /// Headline background under the pointer
    pub highlight: String,
    /// Headline text color under the pointer
    pub contrast: String,
    /// Headline background after the pointer leaves
    pub rest: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            link: "#000".to_string(),
            link_hover: "#ed1212".to_string(),
            highlight: "red".to_string(),
            contrast: "white".to_string(),
            rest: "green".to_string(),
        }
    }
}

impl Theme {
    /// Parses and validates a theme from TOML. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ThemeParseFailed` for malformed TOML or unknown keys and
    /// `Error::InvalidColor` for unusable color values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let theme: Self =
            toml::from_str(source).map_err(|e| Error::theme_parse_failed(e.to_string()))?;
        theme.validate()?;
        tracing::trace!(?theme, "theme loaded");
        Ok(theme)
    }

    /// Checks every color value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColor` for the first empty value or value that
    /// contains CSS declaration syntax.
    pub fn validate(&self) -> Result<()> {
        [
            ("link", &self.link),
            ("link_hover", &self.link_hover),
            ("highlight", &self.highlight),
            ("contrast", &self.contrast),
            ("rest", &self.rest),
        ]
        .into_iter()
        .try_for_each(|(field, value)| validate_color(field, value))
    }

    /// CSS value for a paint
    #[must_use]
    pub fn paint(&self, paint: Paint) -> &str {
        match paint {
            Paint::Highlight => &self.highlight,
            Paint::Contrast => &self.contrast,
            Paint::Rest => &self.rest,
        }
    }
}

fn validate_color(field: &'static str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains([';', ':', '{', '}', '"']) {
        return Err(Error::invalid_color(field, value));
    }
    Ok(())
}
