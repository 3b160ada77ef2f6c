use std::io::stdout;

use anyhow::Result;
use crossterm::event::{Event as TuiEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use tokio::time::Instant;
use tracing::{event, Level};

use crate::{
    animation::AnimationClock,
    config::Settings,
    event::{Event, EventRx},
    widgets::Spinner,
};

pub async fn start(settings: Settings, mut event_rx: EventRx) -> Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut clock = AnimationClock::new();
    let mut last_frame = Instant::now();

    event!(Level::INFO, "start main loop");
    while let Some(ev) = event_rx.recv().await {
        match ev {
            Event::Tick => {
                let now = Instant::now();
                clock.advance(now - last_frame);
                last_frame = now;
                terminal.draw(|frame| render(frame, &settings, clock.elapsed_ms()))?;
            }
            Event::Tui(TuiEvent::Key(key_event)) if is_quit(&key_event) => break,
            Event::Tui(TuiEvent::Resize(width, height)) => {
                event!(Level::DEBUG, "terminal resized to {width}x{height}");
            }
            Event::Tui(_) => {}
        }
    }

    event!(Level::INFO, "stop main loop");
    Ok(())
}

fn render(frame: &mut Frame, settings: &Settings, elapsed_ms: f64) {
    let area = frame.size();
    frame.render_widget(
        Block::new().style(Style::new().bg(settings.background.into())),
        area,
    );

    let spinner = Spinner::new(&settings.spinner, elapsed_ms).background(settings.background);
    let area = centered(area, spinner.preferred_size());
    frame.render_widget_ref(spinner, area);
}

fn centered(area: Rect, (width, height): (u16, u16)) -> Rect {
    let [_, area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, area, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    area
}

fn is_quit(key_event: &KeyEvent) -> bool {
    if key_event.kind == KeyEventKind::Release {
        return false;
    }
    match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use rstest::rstest;

    use super::*;
    use crate::color::Rgb;

    #[rstest]
    #[case::esc(KeyEvent::from(KeyCode::Esc), true)]
    #[case::q(KeyEvent::from(KeyCode::Char('q')), true)]
    #[case::ctrl_c(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), true)]
    #[case::c(KeyEvent::from(KeyCode::Char('c')), false)]
    #[case::enter(KeyEvent::from(KeyCode::Enter), false)]
    #[case::release(
        KeyEvent::new_with_kind(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Release),
        false
    )]
    fn quit_keys(#[case] key_event: KeyEvent, #[case] quit: bool) {
        assert_eq!(quit, is_quit(&key_event));
    }

    #[rstest]
    #[case(Rect::new(0, 0, 120, 30), (100, 20), Rect::new(10, 5, 100, 20))]
    #[case::too_small(Rect::new(0, 0, 50, 10), (100, 20), Rect::new(0, 0, 50, 10))]
    fn centers(#[case] area: Rect, #[case] size: (u16, u16), #[case] result: Rect) {
        assert_eq!(result, centered(area, size));
    }

    #[test]
    fn draws_spinner_on_background() {
        let settings = Settings::default();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, &settings, 200.0))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(Color::from(Rgb::WHITE), buf.get(0, 0).bg);
        // ball 1 at its largest, left of center
        assert_eq!(Color::from(settings.spinner.color1()), buf.get(40, 10).fg);
    }
}
