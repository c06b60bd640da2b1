//! mcpack-manifest CLI
//!
//! Reads the generator config and writes `manifest.json` into the pack directory.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::LazyLock;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use mcpack_manifest::{config::DEFAULT_CONFIG_FILE, generate, Error, ManifestConfig, Result};

static CHECK_MARK: LazyLock<colored::ColoredString> = LazyLock::new(|| "✔".bright_green().bold());
static CROSS_MARK: LazyLock<colored::ColoredString> = LazyLock::new(|| "〤".bright_red().bold());

#[derive(Parser)]
#[command(name = "mcpack-manifest")]
#[command(about = "Generate manifest.json for a Minecraft mod pack", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the generator config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[{}] {}", &*CROSS_MARK, e);
            if matches!(e, Error::ConfigNotFound(_)) {
                eprintln!("Create a {} file to continue.", DEFAULT_CONFIG_FILE);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ManifestConfig::load(&cli.config)?;

    println!("{}", "=== Manifest Generator ===".bold());
    println!("Directory : {}", config.dir.display());
    println!("Base URL  : {}", config.base_url);
    println!("MC Version: {}", config.mc_version);
    println!("Loader    : {} {}", config.loader_type, config.loader_version);
    println!(
        "Server    : {}",
        config.server_address.as_deref().unwrap_or("(none)")
    );
    println!();

    println!("Scanning files...");
    let (manifest, output_path) = generate(&config, |progress| println!("{}", progress))?;
    println!();
    println!("Found {} file(s)", manifest.files.len());
    println!();

    println!(
        "[{}] manifest.json saved to: {}",
        &*CHECK_MARK,
        output_path.display()
    );
    println!("Done!");
    Ok(())
}
