use std::process::ExitCode;

use clap::Parser;
use starfield_demo_core::{
    DemoConfig, DemoError, DesktopWindow, FontAsset, FrameLoop, Music, MusicPlayer, Scroller,
    StarField,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let _cli = Cli::parse();
    let config = DemoConfig::default();

    match run(&config) {
        Ok(()) => {
            tracing::info!("clean shutdown");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&config, &err);
            ExitCode::FAILURE
        }
    }
}

/// Brings everything up in order, runs the loop, and releases resources in
/// reverse order on every exit path as the locals drop.
fn run(config: &DemoConfig) -> starfield_demo_core::Result<()> {
    tracing::info!(
        width = config.viewport.width,
        height = config.viewport.height,
        stars = config.stars.count,
        "starting demo"
    );

    let mut window = DesktopWindow::open(&config.title, config.viewport)?;
    let font = FontAsset::load(&config.scroller.font_path, config.scroller.font_size)?;
    let mut player = MusicPlayer::open(&config.audio)?;
    let music = Music::load(&config.music_path)?;
    player.play_looping(music)?;

    let stars = StarField::new(&config.stars);
    let text = font.render_text(&config.scroller.text, config.scroller.color)?;
    tracing::debug!(width = text.width(), height = text.height(), "scroller text ready");
    let scroller = Scroller::new(text, config.viewport);

    let mut frame_loop = FrameLoop::new(config, stars, scroller);
    frame_loop.run(&mut window)
}

/// Console diagnostic for a fatal error. Missing assets keep the message up
/// for a few seconds so it can be read before the process goes away.
fn report_failure(config: &DemoConfig, err: &DemoError) {
    tracing::error!(subsystem = err.subsystem(), %err, "demo failed");
    println!("{}: {err}", err.subsystem());
    if let DemoError::ResourceLoad { path, .. } = err {
        println!("Please ensure '{path}' is in the same directory as the executable.");
    }
    if err.lingers() {
        hold_startup_failure(config);
    }
}

fn hold_startup_failure(config: &DemoConfig) {
    std::thread::sleep(config.linger());
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Starfield, raster bar and sine scroller demo", long_about = None)]
struct Cli {}
