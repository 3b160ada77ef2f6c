use crossterm::event::Event as TuiEvent;
use tokio::sync::mpsc;

pub type EventTx = mpsc::UnboundedSender<Event>;
pub type EventRx = mpsc::UnboundedReceiver<Event>;

pub fn new_channel() -> (EventTx, EventRx) {
    mpsc::unbounded_channel()
}

#[derive(Debug, Eq, PartialEq)]
pub enum Event {
    /// Time to draw the next frame.
    Tick,
    Tui(TuiEvent),
}
