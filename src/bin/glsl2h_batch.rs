use anyhow::Context;
use clap::Parser;
use glsl2h::config::manifest::BatchConfig;
use glsl2h::utils::{logger, validation::Validate};
use glsl2h::{BatchRunner, LocalStorage};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "glsl2h-batch", version)]
#[command(about = "Convert every shader listed in a TOML manifest into C headers")]
struct Args {
    /// Path to the TOML manifest
    #[arg(short, long, default_value = "shaders.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be generated without reading shaders or writing headers
    #[arg(long)]
    dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading manifest from {}", args.config.display());

    let config = BatchConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load manifest '{}'", args.config.display()))?;

    if let Err(e) = config.validate() {
        tracing::error!("Manifest validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // Manifest paths are relative to the manifest itself.
    let base_dir = args
        .config
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let runner = BatchRunner::new(LocalStorage::new(base_dir), config.jobs());

    if args.dry_run {
        display_plan(&runner, base_dir);
        return Ok(());
    }

    match runner.run() {
        Ok(results) => {
            for result in &results {
                println!("✅ {} -> {}", result.variable, result.output_path);
            }
            tracing::info!("Generated {} headers", results.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

fn display_plan(runner: &BatchRunner<LocalStorage>, base_dir: &Path) {
    println!("🔍 Dry run, base directory: {}", base_dir.display());
    for job in runner.jobs() {
        println!(
            "  {} -> {} ({}, style: {}, guard: {})",
            job.source,
            job.output,
            job.variable,
            job.style.label(),
            job.include_guard.as_deref().unwrap_or("none")
        );
    }
    println!("{} headers would be generated", runner.jobs().len());
}
