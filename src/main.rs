use clap::Parser;
use miette::Result;
use pxgen::cli::{Cli, Commands};
use pxgen::config::Config;
use pxgen::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let printer = Printer::new();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Generate(args) => {
            pxgen::cli::generate::run(args, &config, &printer)?;
        }
        Commands::Palettes(args) => pxgen::cli::palette::run(args, &config, &printer)?,
        Commands::Categories(args) => pxgen::cli::categories::run(args, &printer)?,
        Commands::Init(args) => pxgen::cli::init::run(args, &printer)?,
        Commands::Completions(args) => pxgen::cli::completions::run(args)?,
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "pxgen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> pxgen::Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(Config::discover(&cwd)?.unwrap_or_default())
}
