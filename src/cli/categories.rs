//! Categories command implementation.
//!
//! Lists the asset categories and the variants each one draws from.

use clap::Args;
use serde_json::{json, Value};

use crate::error::{PxError, Result};
use crate::generate::{PropKind, Terrain, WeaponKind, Widget};
use crate::output::{plural, Printer};
use crate::types::Category;

/// List asset categories and their variants
#[derive(Args, Debug, Default)]
pub struct CategoriesArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Variant names drawn by a category. Empty when it has none.
pub fn variants(category: Category) -> Vec<&'static str> {
    match category {
        Category::Prop => PropKind::ALL.iter().map(|k| k.name()).collect(),
        Category::Weapon => WeaponKind::ALL.iter().map(|k| k.name()).collect(),
        Category::Ui => Widget::ALL.iter().map(|w| w.name()).collect(),
        Category::Map => Terrain::ALL.iter().map(|t| t.name()).collect(),
        Category::Character | Category::Monster | Category::Scene => Vec::new(),
    }
}

/// Every category with its variants, in a stable order.
pub fn listing() -> Value {
    let categories: Vec<Value> = Category::ALL
        .iter()
        .map(|&category| {
            json!({
                "name": category.name(),
                "variants": variants(category),
            })
        })
        .collect();
    json!({ "categories": categories })
}

pub fn run(args: CategoriesArgs, printer: &Printer) -> Result<()> {
    printer.status("Listing", &plural(Category::ALL.len(), "category", "categories"));

    if args.json {
        let text = serde_json::to_string_pretty(&listing()).map_err(|e| PxError::Encode {
            message: e.to_string(),
        })?;
        println!("{}", text);
        return Ok(());
    }

    for category in Category::ALL {
        let variants = variants(category);
        if variants.is_empty() {
            println!("{}", category);
        } else {
            println!("{:<10} {}", category.name(), printer.dim(&variants.join(", ")));
        }
    }

    Ok(())
}
