//! Palettes command implementation.
//!
//! Lists the available palettes, or prints the colours of one palette as
//! `$colour-N: #RRGGBB` lines that can be pasted into other tools.

use clap::Args;
use serde_json::json;

use crate::config::Config;
use crate::error::{PxError, Result};
use crate::output::{plural, Printer};
use crate::types::{Palette, PaletteRegistry};

/// List palettes or show the colours of one
#[derive(Args, Debug, Default)]
pub struct PaletteArgs {
    /// Palette to show (omit to list names)
    pub name: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, config: &Config, printer: &Printer) -> Result<()> {
    let registry = config.palette_registry()?;

    match &args.name {
        None => {
            let names: Vec<&str> = registry.names().collect();
            printer.status("Listing", &plural(names.len(), "palette", "palettes"));
            if args.json {
                println!("{}", json!(names));
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
        }
        Some(name) => {
            let palette = find(&registry, name)?;
            printer.status(
                "Showing",
                &format!(
                    "{} {}",
                    printer.bold(&palette.name),
                    printer.dim(&format!("({})", plural(palette.len(), "colour", "colours")))
                ),
            );
            for line in render(palette, args.json) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Look up a palette by exact name.
fn find<'a>(registry: &'a PaletteRegistry, name: &str) -> Result<&'a Palette> {
    registry.get(name).ok_or_else(|| {
        let names: Vec<&str> = registry.names().collect();
        PxError::Validation {
            message: format!("Unknown palette '{}'", name),
            help: Some(format!("Available palettes: {}", names.join(", "))),
        }
    })
}

/// Output lines for one palette.
fn render(palette: &Palette, as_json: bool) -> Vec<String> {
    if as_json {
        let hexes: Vec<String> = palette.colours().iter().map(|c| c.to_hex()).collect();
        return vec![json!({ "name": palette.name, "colours": hexes }).to_string()];
    }

    palette
        .colours()
        .iter()
        .enumerate()
        .map(|(i, colour)| format!("$colour-{}: {}", i + 1, colour))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text() {
        let registry = PaletteRegistry::builtin();
        let lines = render(registry.resolve("default"), false);

        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "$colour-1: #000000");
        assert_eq!(lines[1], "$colour-2: #FFFFFF");
    }

    #[test]
    fn test_render_json() {
        let registry = PaletteRegistry::builtin();
        let lines = render(registry.resolve("retro"), true);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();

        assert_eq!(value["name"], "retro");
        assert_eq!(value["colours"].as_array().unwrap().len(), 16);
        assert_eq!(value["colours"][3], "#444444");
    }

    #[test]
    fn test_unknown_palette_lists_names() {
        let registry = PaletteRegistry::builtin();
        let err = find(&registry, "sepia").unwrap_err();

        match err {
            PxError::Validation { message, help } => {
                assert!(message.contains("sepia"));
                assert!(help.unwrap().contains("default, retro, pastel, dark, neon"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_run_with_project_palette() {
        let config = Config::parse("palettes:\n  mono: [\"#000\", \"#fff\"]\n").unwrap();
        let args = PaletteArgs {
            name: Some("mono".to_string()),
            json: false,
        };
        run(args, &config, &Printer::new()).unwrap();
    }
}
