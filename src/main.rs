use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixterm::cli::Cli;
use pixterm::error::AppError;
use pixterm::models::{AppConfig, Settings, TerminalSize};
use pixterm::services::{play, RenderService};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixterm=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli.config_path();
    let config = AppConfig::load(config_path.as_deref())?;
    let settings = Settings::resolve(&cli, &config, TerminalSize::detect)?;
    let service = RenderService::new(&settings);

    if cli.animated {
        return run_animated(&cli, &service);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &cli.files {
        let text = service
            .render_file(path)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        out.write_all(text.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn run_animated(cli: &Cli, service: &RenderService) -> anyhow::Result<()> {
    let [path] = cli.files.as_slice() else {
        return Err(AppError::Animation(format!(
            "--animated takes exactly one file, got {}",
            cli.files.len()
        ))
        .into());
    };
    let animation = service
        .render_animation(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    if !animation.is_animated() {
        tracing::warn!(path = %path.display(), "Not an animated image, showing a single frame");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    play(&mut out, &animation, std::thread::sleep)?;
    Ok(())
}
