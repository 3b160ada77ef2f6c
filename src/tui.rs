use std::{
    io::{self, stdout},
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{Event as TuiEvent, EventStream},
    execute, queue, terminal,
};
use futures_util::{FutureExt, Stream, StreamExt};
use tokio::time::MissedTickBehavior;
use tracing::{event, Level};

use crate::event::{Event, EventTx};

/// Sends a tick every `tick_rate` and forwards terminal events until the receiver is gone.
pub async fn event_handler(tx: EventTx, tick_rate: Duration) {
    forward_events(tx, EventStream::new(), tick_rate).await;
}

async fn forward_events<S>(tx: EventTx, mut tui_events: S, tick_rate: Duration)
where
    S: Stream<Item = io::Result<TuiEvent>> + Unpin,
{
    let mut tick = tokio::time::interval(tick_rate);
    // a late frame is dropped rather than drawn twice
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let tick_delay = tick.tick();
        let tui_event = tui_events.next().fuse();
        let event = tokio::select! {
            _ = tx.closed() => {
                break;
            }
            _ = tick_delay => {
                Event::Tick
            }
            Some(Ok(tui_event)) = tui_event => {
                Event::Tui(tui_event)
            }
        };
        if tx.send(event).is_err() {
            break;
        }
    }
    event!(Level::DEBUG, "stop forwarding terminal events");
}

pub fn enter() -> Result<()> {
    terminal::enable_raw_mode()?;
    queue!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    Ok(())
}

pub fn exit() -> Result<()> {
    terminal::disable_raw_mode()?;
    execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}
