use ratatui::{prelude::*, widgets::*};

use crate::{
    color::Rgb,
    surface::{BlendMode, Point, Surface},
};

/// RGB pixel grid drawn with upper half blocks, two pixels per cell.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    /// Pixels per logical unit.
    density: f32,
    /// Pixel position of the logical origin.
    origin: Point,
}

impl PixelCanvas {
    /// A canvas covering `area`, filled with `background`.
    pub fn new(area: Rect, background: Rgb) -> Self {
        let width = area.width as usize;
        let height = area.height as usize * 2;
        Self {
            width,
            height,
            pixels: vec![background; width * height],
            density: 1.0,
            origin: Point::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn transform(mut self, density: f32, origin: Point) -> Self {
        self.density = density;
        self.origin = origin;
        self
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    fn to_pixels(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + p.x * self.density,
            self.origin.y + p.y * self.density,
        )
    }
}

impl Surface for PixelCanvas {
    fn draw_circle(&mut self, color: Rgb, center: Point, radius: f32, blend: BlendMode) {
        let center = self.to_pixels(center);
        let radius = radius * self.density;
        if !(radius > 0.0 && center.x.is_finite() && center.y.is_finite()) {
            return;
        }

        let span = |c: f32, len: usize| {
            let lo = (c - radius).floor().max(0.0) as usize;
            let hi = ((c + radius).ceil().max(0.0) as usize).min(len);
            lo..hi
        };
        let rr = radius * radius;
        for y in span(center.y, self.height) {
            let dy = y as f32 + 0.5 - center.y;
            for x in span(center.x, self.width) {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy > rr {
                    continue;
                }
                let pixel = &mut self.pixels[y * self.width + x];
                *pixel = match blend {
                    BlendMode::Multiply => pixel.multiply(color),
                };
            }
        }
    }
}

impl WidgetRef for PixelCanvas {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        for row in 0..area.height.min((self.height / 2) as u16) {
            for col in 0..area.width.min(self.width as u16) {
                let (x, y) = (col as usize, row as usize * 2);
                let (Some(upper), Some(lower)) = (self.pixel(x, y), self.pixel(x, y + 1)) else {
                    continue;
                };
                buf.get_mut(area.x + col, area.y + row)
                    .set_symbol("▀")
                    .set_fg(upper.into())
                    .set_bg(lower.into());
            }
        }
    }
}
