mod app;
mod assets;
mod config;

use anyhow::Result;
use quickstart_core::logging::{init_logging, LoggingConfig};

use crate::app::Quickstart;
use crate::config::AppConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = AppConfig::default();

    println!();
    println!("  ┌────────────────────────────────────────┐");
    println!("  │  {:<38}│", config.title);
    println!("  │  {:<38}│", "headless quickstart, bouncing wabbit");
    println!("  └────────────────────────────────────────┘");
    println!();

    let mut app = Quickstart::load(config)?;
    let frames = app.run()?;

    let sprite = app.sprite();
    log::info!(
        "done after {frames} frames: sprite {}x{} at ({:.1}, {:.1}), music {}",
        app.sprite_size().x,
        app.sprite_size().y,
        sprite.position.x,
        sprite.position.y,
        if app.has_music() { "found" } else { "missing" },
    );
    Ok(())
}
