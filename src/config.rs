//! Project configuration (pxgen.yaml) parsing.
//!
//! The config sets output defaults for the CLI and can add project palettes
//! on top of the builtin ones.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PxError, Result};
use crate::types::{GenerationOptions, Palette, PaletteRegistry};

/// Config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "pxgen.yaml";

/// Largest accepted output scale factor.
pub const MAX_SCALE: u32 = 64;

/// Project configuration loaded from pxgen.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output directory for generated images.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Default scale factor for output.
    pub scale: Option<u32>,

    /// Key the black background out to transparent.
    pub transparent: bool,

    /// Gap between cells on contact sheets.
    pub padding: Option<u32>,

    /// Defaults for every generation.
    pub defaults: GenerationOptions,

    /// Extra palettes: name -> hex colours, in order.
    pub palettes: BTreeMap<String, Vec<String>>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            scale: None,
            transparent: false,
            padding: None,
            defaults: GenerationOptions::default(),
            palettes: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load config from a pxgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `pxgen.yaml` from `dir` if present, otherwise defaults.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| PxError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PxError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }

    /// Get the effective sheet padding.
    pub fn effective_padding(&self) -> u32 {
        self.padding.unwrap_or(1)
    }

    /// Builtin palettes plus the ones defined here.
    ///
    /// A project palette with a builtin name replaces the builtin.
    pub fn palette_registry(&self) -> Result<PaletteRegistry> {
        let mut registry = PaletteRegistry::builtin();
        for (name, hexes) in &self.palettes {
            let hexes: Vec<&str> = hexes.iter().map(String::as_str).collect();
            let palette = Palette::from_hex(name.clone(), &hexes).map_err(|e| match e {
                PxError::Parse { message, .. } => PxError::Parse {
                    message: format!("Palette '{}': {}", name, message),
                    help: Some("Colours must be hex strings like \"#1a1c2c\"".to_string()),
                },
                other => other,
            })?;
            registry.insert(palette);
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("output: build").unwrap();

        assert_eq!(config.output, PathBuf::from("build"));
        assert_eq!(config.defaults, GenerationOptions::default());
        assert!(config.palettes.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
output: dist/sprites
scale: 4
transparent: true
padding: 2
defaults:
  size: 64
  colorPalette: neon
palettes:
  gameboy: ["#0f380f", "#306230", "#8bac0f", "#9bbc0f"]
unknown_key: ignored
"##;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.output, PathBuf::from("dist/sprites"));
        assert_eq!(config.effective_scale(), 4);
        assert!(config.transparent);
        assert_eq!(config.effective_padding(), 2);
        assert_eq!(config.defaults.size, 64);
        assert_eq!(config.defaults.colour_palette, "neon");
        assert_eq!(config.defaults.style, "8-bit");
        assert_eq!(config.palettes["gameboy"].len(), 4);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.effective_scale(), 1);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = Config::parse("scale: [oops").unwrap_err();
        assert!(matches!(err, PxError::Parse { .. }));
    }

    #[test]
    fn test_palette_registry() {
        let config = Config::parse("palettes:\n  mono: [\"#000\", \"#fff\"]\n").unwrap();
        let registry = config.palette_registry().unwrap();

        assert_eq!(
            registry.resolve("mono").colours(),
            &[Colour::BLACK, Colour::WHITE]
        );
        assert!(registry.contains("default"));
    }

    #[test]
    fn test_palette_registry_rejects_bad_hex() {
        let config = Config::parse("palettes:\n  broken: [\"#nothex\"]\n").unwrap();
        let err = config.palette_registry().unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_round_trip_yaml() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::discover(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "scale: 3").unwrap();
        let config = Config::discover(dir.path()).unwrap().unwrap();
        assert_eq!(config.effective_scale(), 3);
    }
}
