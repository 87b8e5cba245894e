pub mod categories;
pub mod completions;
pub mod generate;
pub mod init;
pub mod palette;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pxgen - Procedural pixel-art asset generator
#[derive(Parser, Debug)]
#[command(name = "pxgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log generation details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Config file (default: ./pxgen.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate pixel-art assets
    Generate(generate::GenerateArgs),

    /// List palettes or show the colours of one
    Palettes(palette::PaletteArgs),

    /// List asset categories and their variants
    Categories(categories::CategoriesArgs),

    /// Initialize a pxgen project (writes pxgen.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "pxgen", "generate", "monster", "-s", "64", "-p", "neon", "--seed", "3", "-n", "2",
            "--sheet", "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.category, "monster");
                assert_eq!(args.size, Some(64));
                assert_eq!(args.palette.as_deref(), Some("neon"));
                assert_eq!(args.seed, Some(3));
                assert_eq!(args.count, 2);
                assert!(args.sheet);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_requires_category() {
        assert!(Cli::try_parse_from(["pxgen", "generate"]).is_err());
    }
}
