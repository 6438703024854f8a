//! Gaze Collage CLI
//!
//! Minimal demonstration shell: runs a complete nine-gaze capture
//! session against the mock camera and exports the labeled collage.

use clap::Parser;
use gaze_collage::{
    adjust::adjust_brightness,
    capture::{CameraSource, CaptureConfig, MockCamera},
    collage::{collage_filename, compose, timestamp_text, write_jpeg, CollageLayout, CollageOptions},
    config::Settings,
    session::CaptureSession,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "gaze-collage", version, about)]
struct Cli {
    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the exported collage is written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Override the persisted brightness (0-100).
    #[arg(long)]
    brightness: Option<u8>,

    /// Disable position-number labels on the collage.
    #[arg(long)]
    no_labels: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    info!("Gaze Collage v{}", gaze_collage::VERSION);
    info!("This is a demonstration using mock camera input");

    // Load persisted settings once; they are passed into core calls as
    // immutable snapshots from here on.
    let mut settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to load settings: {}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if let Some(brightness) = cli.brightness {
        settings.brightness = brightness.min(100);
    }
    if cli.no_labels {
        settings.show_position_labels = false;
    }

    let capture_config = CaptureConfig::default();
    let mut camera = MockCamera::new();
    if let Err(e) = camera.open(&capture_config) {
        eprintln!("Failed to open camera: {}", e);
        std::process::exit(1);
    }

    let mut session = CaptureSession::new();

    while !session.is_complete() {
        let position = session.cursor();
        info!(
            position = position.number(),
            glyph = position.glyph(),
            "{}",
            position.instruction().lines().next().unwrap_or_default()
        );

        let frame = camera
            .read_frame()
            .map(|f| adjust_brightness(&f, settings.brightness));

        match session.capture(frame) {
            Ok(_) => {
                session.advance(1);
            }
            Err(e) => {
                // Transient: try again on the next poll tick.
                warn!("Capture at position {} failed: {}", position, e);
                std::thread::sleep(capture_config.frame_interval());
            }
        }
    }
    camera.release();

    let now = chrono::Local::now();
    let options = CollageOptions {
        show_position_labels: settings.show_position_labels,
        timestamp_text: timestamp_text(now),
    };

    let collage = match compose(session.frames(), &CollageLayout, &options) {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("Failed to compose collage: {}", e);
            std::process::exit(1);
        }
    };

    let path = cli.output_dir.join(collage_filename(now));
    if let Err(e) = write_jpeg(&collage, &path) {
        eprintln!("Failed to export collage: {}", e);
        std::process::exit(1);
    }

    println!("Collage saved to: {}", path.display());
}
