//! Drippy Spelunk Runtime
//!
//! Minimal binary that boots the title-screen services and reports what it
//! loaded. The window wrapper and rendering views attach on top of this.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use drippy_config::FileStore;
use drippy_services::roster::load_roster;
use drippy_services::title::TitleScreen;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Config file location (defaults to the per-user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!("Drippy Spelunk v{}", drippy_core::VERSION);

    let path = match args.config {
        Some(path) => path,
        None => FileStore::default_path().context("no per-user config directory available")?,
    };
    tracing::info!(path = %path.display(), "using config file");
    let store = FileStore::open(path);

    let roster = load_roster().context("loading character roster")?;
    let title = TitleScreen::new(store, roster);

    let settings = title.current_settings();
    tracing::info!(
        gui_scale = settings.gui_scale,
        difficulty = settings.difficulty,
        undecorated = settings.undecorated,
        "scene settings"
    );
    tracing::info!(
        music = settings.music_volume,
        sfx = settings.sfx_volume,
        ui = settings.ui_volume,
        "audio settings"
    );

    for character in title.available_characters() {
        tracing::info!(
            name = %character.name,
            sprite = character.avatar.sprite_path(),
            "selectable character"
        );
    }

    tracing::info!("title screen ready");
    Ok(())
}
