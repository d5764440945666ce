use anyhow::{Context, Result};
use cat_neuron::config::DemoConfig;
use cat_neuron::tui::{App, EventHandler, Tui};
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// You Are the Neural Network: decide whether the image is a cat.
#[derive(Debug, Parser)]
#[command(name = "cat-neuron", version, about)]
struct Args {
    /// TOML config file (slider step, image assets)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where log output goes; the terminal itself is used for the UI
    #[arg(long, default_value = "cat-neuron.log")]
    log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
    WriteLogger::init(args.log_level, Config::default(), log_file)?;

    let config = match &args.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => DemoConfig::default(),
    };

    let mut app = App::new(config);
    Tui::install_panic_hook();
    let mut tui = Tui::new()?;
    let events = EventHandler::new();
    log::info!("session started");

    let result = run(&mut app, &mut tui, &events);

    // Restore the terminal even when the loop failed.
    Tui::restore_terminal()?;
    log::info!("session ended");
    result
}

fn run(app: &mut App, tui: &mut Tui, events: &EventHandler) -> Result<()> {
    while app.is_running {
        tui.draw(app)?;
        let action = events.next()?;
        app.dispatch(action)?;
    }
    Ok(())
}
