use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Multiply with whatever is below, so overlapping balls darken.
    Multiply,
}

/// A position in logical units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Something that can draw filled circles given in logical units.
///
/// Mapping logical units to device pixels is up to the implementation.
pub trait Surface {
    fn draw_circle(&mut self, color: Rgb, center: Point, radius: f32, blend: BlendMode);
}
