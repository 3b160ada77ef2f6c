use ratatui::{prelude::*, widgets::*};

use super::PixelCanvas;
use crate::{animation::compute_frame, color::Rgb, config::SpinnerConfig, surface::Point};

/// Logical box the balls move in.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Viewport {
    left: f32,
    width: f32,
    height: f32,
}

/// The two-ball spinner at one instant.
pub struct Spinner<'a> {
    config: &'a SpinnerConfig,
    elapsed_ms: f64,
    background: Rgb,
}

impl<'a> Spinner<'a> {
    pub fn new(config: &'a SpinnerConfig, elapsed_ms: f64) -> Self {
        Self {
            config,
            elapsed_ms,
            background: Rgb::WHITE,
        }
    }

    pub fn background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Ball 1 starts centered on x = 0, so the box reaches one radius to the left of it.
    fn viewport(&self) -> Viewport {
        let left = -self.config.ball_radius();
        Viewport {
            left,
            width: self.config.base_length() * 2.0 - left,
            height: self.config.base_length(),
        }
    }

    /// Cells needed to draw at one pixel per logical unit.
    pub fn preferred_size(&self) -> (u16, u16) {
        let Viewport { width, height, .. } = self.viewport();
        (width.ceil() as u16, (height / 2.0).ceil() as u16)
    }
}

impl WidgetRef for Spinner<'_> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let canvas = PixelCanvas::new(area, self.background);
        let Viewport {
            left,
            width,
            height,
        } = self.viewport();
        let (px_width, px_height) = (canvas.width() as f32, canvas.height() as f32);
        let density = (px_width / width).min(px_height / height);
        let origin = Point::new(
            (px_width - width * density) / 2.0 - left * density,
            (px_height - height * density) / 2.0,
        );
        let mut canvas = canvas.transform(density, origin);

        compute_frame(self.elapsed_ms, self.config).draw_on(&mut canvas);
        canvas.render_ref(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    const PINK: Rgb = Rgb(0xcb, 0x27, 0x90);
    const TEAL: Rgb = Rgb(0x6b, 0xdf, 0xe0);

    #[fixture]
    fn config() -> SpinnerConfig {
        SpinnerConfig::new(40.0, 0.2, PINK, TEAL).unwrap()
    }

    fn render(spinner: Spinner, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        spinner.render_ref(area, &mut buf);
        buf
    }

    #[rstest]
    fn preferred_size(config: SpinnerConfig) {
        assert_eq!((100, 20), Spinner::new(&config, 0.0).preferred_size());
    }

    #[rstest]
    fn viewport_reaches_left_of_first_ball(config: SpinnerConfig) {
        assert_eq!(
            Viewport {
                left: -20.0,
                width: 100.0,
                height: 40.0,
            },
            Spinner::new(&config, 0.0).viewport()
        );
    }

    #[rstest]
    fn empty_area(config: SpinnerConfig) {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        Spinner::new(&config, 0.0).render_ref(Rect::new(0, 0, 0, 4), &mut buf);
        assert_eq!(Buffer::empty(Rect::new(0, 0, 4, 4)), buf);
    }

    #[rstest]
    fn draws_both_balls(config: SpinnerConfig) {
        // at 200ms ball 1 sits at x = 20 and ball 2 at x = 40, both at y = 20
        let buf = render(Spinner::new(&config, 200.0), Rect::new(0, 0, 100, 20));
        // viewport starts at x = -20, so logical x maps to column x + 20
        assert_eq!(Color::from(PINK), buf.get(30, 5).fg);
        assert_eq!(Color::from(TEAL), buf.get(70, 10).bg);
        assert_eq!(Color::from(Rgb::WHITE), buf.get(99, 0).fg);
    }

    #[rstest]
    fn overlap_is_multiplied(config: SpinnerConfig) {
        let buf = render(Spinner::new(&config, 200.0), Rect::new(0, 0, 100, 20));
        // x = 30 is inside both balls
        assert_eq!(Color::from(PINK.multiply(TEAL)), buf.get(50, 10).fg);
    }

    #[rstest]
    fn custom_background(config: SpinnerConfig) {
        let buf = render(
            Spinner::new(&config, 0.0).background(Rgb(0, 0, 0x20)),
            Rect::new(0, 0, 100, 20),
        );
        assert_eq!(Color::Rgb(0, 0, 0x20), buf.get(99, 19).bg);
    }

    #[rstest]
    fn fits_small_area(config: SpinnerConfig) {
        let buf = render(Spinner::new(&config, 200.0), Rect::new(0, 0, 10, 2));
        assert!(buf
            .content
            .iter()
            .any(|cell| cell.fg == Color::from(PINK) || cell.bg == Color::from(PINK)));
    }
}
