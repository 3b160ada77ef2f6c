mod animation;
mod app;
mod color;
mod config;
mod event;
mod surface;
mod tui;
mod utils;
mod widgets;

use anyhow::Result;
use tracing::Level;

use crate::config::Settings;

fn main() -> Result<()> {
    utils::init()?;
    let settings = Settings::load()?;
    scopeguard::defer! {
        if let Err(err) = tui::exit() {
            tracing::event!(Level::ERROR, "failed to reset the terminal: {err}");
        }
    }
    tui::enter()?;
    main_async(settings)
}

#[tokio::main]
async fn main_async(settings: Settings) -> Result<()> {
    let (event_tx, event_rx) = event::new_channel();
    let events = tokio::spawn(tui::event_handler(event_tx, settings.frame_interval));

    let result = app::start(settings, event_rx).await;
    events.abort();
    result
}
