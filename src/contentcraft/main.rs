use clap::Parser;
use contentcraft::api::ContentWorkspace;
use contentcraft::config::{WorkspaceConfig, CONFIG_FILENAME};
use contentcraft::error::Result;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::Cli;

const CONFIG_ENV: &str = "CONTENTCRAFT_CONFIG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match config_path(&cli) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            WorkspaceConfig::load(&path)?
        }
        None => WorkspaceConfig::default(),
    };
    if cli.no_samples {
        config.seed_samples = false;
    }

    let mut workspace = ContentWorkspace::in_memory(config);
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    cli::shell::run(&mut workspace, stdin.lock(), interactive)
}

/// `--config` wins, then `$CONTENTCRAFT_CONFIG`, then the platform config dir.
fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "contentcraft", "contentcraft")
                .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
        })
}
