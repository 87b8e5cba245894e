//! Asset categories and generation options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PxError, Result};

use super::palette::DEFAULT_PALETTE;

/// Default canvas edge length in pixels.
pub const DEFAULT_SIZE: u32 = 32;

/// Largest canvas edge length accepted.
pub const MAX_SIZE: u32 = 4096;

/// Default style tag.
pub const DEFAULT_STYLE: &str = "8-bit";

/// The kinds of asset the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Character,
    Monster,
    Prop,
    Weapon,
    Scene,
    Map,
    Ui,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Character,
        Category::Monster,
        Category::Prop,
        Category::Weapon,
        Category::Scene,
        Category::Map,
        Category::Ui,
    ];

    /// Lowercase name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Category::Character => "character",
            Category::Monster => "monster",
            Category::Prop => "prop",
            Category::Weapon => "weapon",
            Category::Scene => "scene",
            Category::Map => "map",
            Category::Ui => "ui",
        }
    }
}

impl FromStr for Category {
    type Err = PxError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| PxError::UnsupportedCategory {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options controlling a single generation.
///
/// Missing fields take their defaults and unknown fields are ignored, so a
/// loosely-typed request body deserializes without ceremony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Canvas width and height in pixels.
    pub size: u32,

    /// Palette name; unknown names sample from `default`.
    #[serde(rename = "colorPalette", alias = "palette")]
    pub colour_palette: String,

    /// Free-form style tag. Carried through but not interpreted.
    pub style: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            colour_palette: DEFAULT_PALETTE.to_string(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

impl GenerationOptions {
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.colour_palette = palette.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Copy with a usable size: 0 becomes the default, oversize is clamped.
    pub fn normalized(&self) -> Self {
        let size = match self.size {
            0 => DEFAULT_SIZE,
            s => s.min(MAX_SIZE),
        };
        let colour_palette = if self.colour_palette.trim().is_empty() {
            DEFAULT_PALETTE.to_string()
        } else {
            self.colour_palette.clone()
        };
        Self {
            size,
            colour_palette,
            style: self.style.clone(),
        }
    }

    /// Reject sizes outside `1..=MAX_SIZE` instead of normalizing them.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(PxError::Validation {
                message: format!("Invalid size: {}", self.size),
                help: Some(format!("Size must be between 1 and {}", MAX_SIZE)),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_from_str() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_unknown() {
        let err = "spaceship".parse::<Category>().unwrap_err();
        assert!(matches!(err, PxError::UnsupportedCategory { ref name } if name == "spaceship"));
        assert!("Character".parse::<Category>().is_err());
    }

    #[test]
    fn test_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.size, 32);
        assert_eq!(options.colour_palette, "default");
        assert_eq!(options.style, "8-bit");
    }

    #[test]
    fn test_deserialize_partial_and_unknown_fields() {
        let options: GenerationOptions =
            serde_json::from_str(r#"{"colorPalette":"neon","extra":true}"#).unwrap();
        assert_eq!(
            options,
            GenerationOptions::default().with_palette("neon")
        );

        let options: GenerationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, GenerationOptions::default());
    }

    #[test]
    fn test_deserialize_palette_alias() {
        let options: GenerationOptions =
            serde_json::from_str(r#"{"size":64,"palette":"dark","style":"modern"}"#).unwrap();
        assert_eq!(options.size, 64);
        assert_eq!(options.colour_palette, "dark");
        assert_eq!(options.style, "modern");
    }

    #[test]
    fn test_normalized() {
        assert_eq!(GenerationOptions::default().with_size(0).normalized().size, 32);
        assert_eq!(GenerationOptions::default().with_size(99_999).normalized().size, MAX_SIZE);
        assert_eq!(GenerationOptions::default().with_size(16).normalized().size, 16);
        assert_eq!(
            GenerationOptions::default().with_palette(" ").normalized().colour_palette,
            "default"
        );
    }

    #[test]
    fn test_validate() {
        assert!(GenerationOptions::default().validate().is_ok());
        assert!(GenerationOptions::default().with_size(0).validate().is_err());
        assert!(GenerationOptions::default().with_size(MAX_SIZE + 1).validate().is_err());
    }
}
