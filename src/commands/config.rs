//! `algotrace config` - show or initialize the configuration file

use std::path::Path;

use crate::cli::format::emit;
use crate::cli::ConfigCommands;
use crate::commands::dispatch::CommandContext;
use algotrace_core::config::AppConfig;
use algotrace_core::error::{Result, TraceError};

pub fn execute(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
    let path = AppConfig::config_path(ctx.cli.config_dir.as_deref())?;
    match command {
        ConfigCommands::Show => show(ctx, &path),
        ConfigCommands::Init { force } => init(ctx, &path, *force),
    }
}

fn show(ctx: &CommandContext, path: &Path) -> Result<()> {
    let config = &ctx.config;
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| TraceError::Other(format!("failed to serialize config: {}", e)))?;
    emit(
        ctx.cli.format,
        || {
            Ok(serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
                "config": config,
            }))
        },
        || {
            if !ctx.cli.quiet {
                println!("# {}", path.display());
            }
            print!("{}", rendered);
        },
        || {
            println!(
                "H algotrace=1 records=1 mode=config.show path={} exists={}",
                path.display(),
                path.exists()
            );
            println!("C playback_delay_ms={}", config.playback_delay_ms);
            println!("C page_size={}", config.page_size);
            println!("C weight_tolerance={}", config.weight_tolerance);
            println!("C frontier={}", config.frontier);
        },
    )
}

fn init(ctx: &CommandContext, path: &Path, force: bool) -> Result<()> {
    let status = if path.exists() && !force {
        "exists"
    } else {
        AppConfig::default().save(path)?;
        tracing::debug!(path = %path.display(), "config_written");
        "created"
    };

    emit(
        ctx.cli.format,
        || {
            Ok(serde_json::json!({
                "status": status,
                "path": path.display().to_string(),
            }))
        },
        || {
            if status == "exists" {
                println!("Config already exists at {} (use --force to overwrite)", path.display());
            } else {
                println!("Wrote default config to {}", path.display());
            }
        },
        || {
            println!(
                "H algotrace=1 records=1 mode=config.init status={} path={}",
                status,
                path.display()
            );
        },
    )
}
