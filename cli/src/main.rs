use clap::Parser;
use slidedeck_tui::{InputEvent, LayoutDirection, OutputEvent, Panel};
use std::path::PathBuf;
use tokio::sync::{broadcast, mpsc};

mod commands;
mod config;
mod logging;

use commands::Commands;
use crate::config::{AppConfig, Overrides};

#[derive(Parser, PartialEq, Debug)]
#[command(name = "slidedeck")]
#[command(about = "Five panel terminal carousel with slide transitions", long_about = None)]
struct Cli {
    /// Panel to show first (a-e)
    #[arg(short = 's', long = "start")]
    start: Option<Panel>,

    /// Slide duration in milliseconds, 0 disables the animation
    #[arg(long = "animation-ms", env = "SLIDEDECK_ANIMATION_MS")]
    animation_ms: Option<u64>,

    /// Redraw interval while a slide runs, in milliseconds
    #[arg(long = "frame-ms")]
    frame_ms: Option<u64>,

    /// Lay panels out right-to-left
    #[arg(long = "rtl", default_value_t = false)]
    rtl: bool,

    /// Path to the config file
    #[arg(short = 'c', long = "config")]
    config_path: Option<PathBuf>,

    /// Enable debug logging to ~/.slidedeck/logs
    #[arg(long = "debug", default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            start: self.start,
            animation_ms: self.animation_ms,
            frame_ms: self.frame_ms,
            layout_direction: self.rtl.then_some(LayoutDirection::RightToLeft),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _log_guard = if cli.debug {
        match logging::init(&logging::default_log_dir()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("{}", e);
                None
            }
        }
    } else {
        None
    };

    let config = match AppConfig::load(cli.config_path.as_ref())
        .and_then(|config| config.with_overrides(cli.overrides()))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(command) => {
            if let Err(e) = command.run(config) {
                eprintln!("Ops! something went wrong: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = run_carousel(config).await {
                eprintln!("Ops! something went wrong: {}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn run_carousel(config: AppConfig) -> std::io::Result<()> {
    // The sender is held for the lifetime of the UI; a closed channel quits it.
    let (_input_tx, input_rx) = mpsc::channel::<InputEvent>(100);
    let (output_tx, mut output_rx) = mpsc::channel::<OutputEvent>(100);
    let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);

    let events_task = tokio::spawn(async move {
        loop {
            tokio::select! {
                event = output_rx.recv() => match event {
                    Some(OutputEvent::TransitionStarted(transition)) => {
                        tracing::info!(
                            from = %transition.from,
                            to = %transition.to,
                            direction = ?transition.direction,
                            edge = ?transition.edge,
                            "transition started"
                        );
                    }
                    Some(OutputEvent::Settled(panel)) => {
                        tracing::debug!(panel = %panel, "transition settled");
                    }
                    None => break,
                },
                _ = shutdown_rx.recv() => break,
            }
        }
    });

    let result =
        slidedeck_tui::run_tui(input_rx, output_tx, shutdown_tx, config.state_options()).await;
    let _ = events_task.await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags_into_overrides() {
        let cli = Cli::try_parse_from([
            "slidedeck",
            "--start",
            "d",
            "--animation-ms",
            "0",
            "--frame-ms",
            "10",
            "--rtl",
        ])
        .unwrap();

        assert_eq!(
            cli.overrides(),
            Overrides {
                start: Some(Panel::D),
                animation_ms: Some(0),
                frame_ms: Some(10),
                layout_direction: Some(LayoutDirection::RightToLeft),
            }
        );
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_no_flags_override_nothing() {
        let cli = Cli::try_parse_from(["slidedeck"]).unwrap();
        assert_eq!(cli.overrides().start, None);
        assert_eq!(cli.overrides().layout_direction, None);
        assert_eq!(cli.overrides().frame_ms, None);
    }

    #[test]
    fn test_rejects_unknown_panel() {
        assert!(Cli::try_parse_from(["slidedeck", "--start", "x"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["slidedeck", "config", "show"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config(commands::ConfigCommands::Show))
        );

        let cli = Cli::try_parse_from(["slidedeck", "config", "init", "--force"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config(commands::ConfigCommands::Init { force: true }))
        );
    }
}
