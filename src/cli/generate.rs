//! Generate command implementation.
//!
//! Generates one or more assets and writes them as PNG files, or as a single
//! contact sheet.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, MAX_SCALE};
use crate::error::{PxError, Result};
use crate::generate::{generate_canvas, generator_for};
use crate::output::{plural, Printer};
use crate::render::{scaled_edge, write_png, write_sheet_json, Canvas, SheetBuilder};
use crate::types::{Category, Colour, GenerationOptions};

/// Generate pixel-art assets
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Asset category: character, monster, prop, weapon, scene, map or ui
    #[arg(required = true)]
    pub category: String,

    /// Canvas size in pixels (square)
    #[arg(long, short)]
    pub size: Option<u32>,

    /// Palette name (default, retro, pastel, dark, neon, or one from pxgen.yaml)
    #[arg(long, short)]
    pub palette: Option<String>,

    /// Style tag, recorded but not interpreted
    #[arg(long)]
    pub style: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of variations to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: usize,

    /// Pack all variations into one contact sheet
    #[arg(long)]
    pub sheet: bool,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Make the background transparent
    #[arg(long)]
    pub transparent: bool,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output file stem (defaults to the category name)
    #[arg(long)]
    pub name: Option<String>,
}

impl GenerateArgs {
    /// Merge flags over config defaults.
    fn options(&self, config: &Config) -> GenerationOptions {
        let mut options = config.defaults.clone();
        if let Some(size) = self.size {
            options.size = size;
        }
        if let Some(palette) = &self.palette {
            options.colour_palette = palette.clone();
        }
        if let Some(style) = &self.style {
            options.style = style.clone();
        }
        options
    }

    fn stem(&self, category: Category) -> String {
        match (&self.name, self.seed) {
            (Some(name), _) => name.clone(),
            (None, Some(seed)) => format!("{}-{}", category, seed),
            (None, None) => category.to_string(),
        }
    }
}

/// Run the command. Returns the paths written.
pub fn run(args: GenerateArgs, config: &Config, printer: &Printer) -> Result<Vec<PathBuf>> {
    // Reject unknown categories before touching the filesystem
    let category: Category = args.category.parse()?;

    let options = args.options(config);
    options.validate()?;

    if args.count == 0 {
        return Err(PxError::Validation {
            message: "Count must be at least 1".to_string(),
            help: None,
        });
    }

    let scale = args.scale.unwrap_or_else(|| config.effective_scale()).max(1);
    if scale > MAX_SCALE {
        return Err(PxError::Validation {
            message: format!("Scale {} is out of range", scale),
            help: Some(format!("Use a scale between 1 and {}", MAX_SCALE)),
        });
    }
    scaled_edge(options.size as usize, scale)?;

    let palettes = config.palette_registry()?;
    if !palettes.contains(&options.colour_palette) {
        printer.warning(
            "Palette",
            &format!(
                "unknown palette '{}', using '{}'",
                options.colour_palette,
                palettes.resolve(&options.colour_palette).name
            ),
        );
    }

    let output = args.output.clone().unwrap_or_else(|| config.output.clone());
    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| PxError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let transparent = args.transparent || config.transparent;
    let background = generator_for(category).background();

    printer.generating(category, args.count, options.size, &options.colour_palette);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stem = args.stem(category);
    let mut canvases: Vec<(String, Canvas)> = Vec::with_capacity(args.count);
    for i in 0..args.count {
        let mut canvas = generate_canvas(category, &options, &palettes, &mut rng);
        if transparent {
            canvas.replace(background, Colour::TRANSPARENT);
        }
        let name = if args.count == 1 {
            stem.clone()
        } else {
            format!("{}-{}", stem, i)
        };
        canvases.push((name, canvas));
    }

    let written = if args.sheet {
        let gap = if transparent { Colour::TRANSPARENT } else { background };
        let builder = SheetBuilder::new(config.effective_padding()).with_background(gap);
        write_sheet(&builder, &canvases, &output, &stem, scale, printer)?
    } else {
        write_each(&canvases, &output, scale, printer)?
    };

    printer.finished(written.len(), &output);

    Ok(written)
}

fn write_each(
    canvases: &[(String, Canvas)],
    output: &Path,
    scale: u32,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(canvases.len());
    for (name, canvas) in canvases {
        let path = output.join(format!("{}.png", name));
        write_png(canvas, &path, scale)?;
        printer.wrote(&path);
        written.push(path);
    }
    Ok(written)
}

fn write_sheet(
    builder: &SheetBuilder,
    canvases: &[(String, Canvas)],
    output: &Path,
    stem: &str,
    scale: u32,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    let (sheet, mut meta) = builder.pack(canvases);

    let image_name = format!("{}-sheet.png", stem);
    meta.image = image_name.clone();
    meta.scale = scale;

    let image_path = output.join(&image_name);
    let json_path = output.join(format!("{}-sheet.json", stem));
    let edge = scaled_edge(sheet.size(), scale)?;
    write_png(&sheet, &image_path, scale)?;
    write_sheet_json(&meta, &json_path)?;

    printer.info(
        "Packed",
        &format!(
            "{} {}",
            plural(meta.frames.len(), "frame", "frames"),
            printer.dim(&format!("({}x{})", edge, edge))
        ),
    );
    printer.wrote(&image_path);

    Ok(vec![image_path, json_path])
}
