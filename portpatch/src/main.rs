use clap::Parser;
use log::{info, LevelFilter};
use std::{path::PathBuf, str::FromStr};

use portpatch_core::{
    run::{patch_ports, preview_ports},
    DEFAULT_COMPOSE_FILE,
};

use config::{load_config, set_config_dir_override, Config};
use logging::{setup_logging, DEFAULT_LOG_LEVEL};

mod config;
mod logging;

#[derive(Parser, Debug)]
#[command(about = "Rewrite the hardcoded web port mappings in a compose file.")]
#[command(version)]
struct Args {
    /// Compose file to patch (default: `compose_file` from the config file, otherwise /root/salon-saas/infra/docker-compose.yml)
    #[arg(index = 1)]
    file: Option<PathBuf>,

    /// Print the changes that would be made instead of writing them
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    dry_run: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(
        long,
        value_parser = parse_log_level,
        default_value = DEFAULT_LOG_LEVEL
    )]
    log_level: LevelFilter,

    /// Override the config directory (default: ~/.config/portpatch on Linux/macOS, %AppData%\portpatch on Windows)
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("Invalid log level: {s}"))
}

fn target_file(args: &Args, config: &Config) -> PathBuf {
    args.file
        .clone()
        .or_else(|| config.compose_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPOSE_FILE))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(ref config_dir) = args.config_dir {
        set_config_dir_override(config_dir);
    }
    setup_logging(args.log_level)?;

    let config = load_config()?;
    let target = target_file(&args, &config);
    info!("Target compose file: {}", target.display());

    let output = if args.dry_run {
        preview_ports(&target)?
    } else {
        patch_ports(&target)?
    };
    print!("{output}");

    Ok(())
}
