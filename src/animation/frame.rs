use super::{
    curve::{scale_curve1, scale_curve2},
    CYCLE_MS, TRANSLATION_MS,
};
use crate::{
    color::Rgb,
    config::SpinnerConfig,
    surface::{BlendMode, Point, Surface},
};

/// How one ball is drawn in the current frame, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallDraw {
    pub center_offset_x: f32,
    /// Unscaled radius. Also the vertical center, since balls sit on the top edge.
    pub radius: f32,
    pub scale: f32,
    pub color: Rgb,
}

impl BallDraw {
    pub fn center(&self) -> Point {
        Point::new(self.center_offset_x, self.radius)
    }

    pub fn scaled_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub progress: f32,
    pub ball1: BallDraw,
    pub ball2: BallDraw,
}

impl FrameOutput {
    /// Balls in painting order. The last one ends up on top.
    ///
    /// Ball 1 is on top for the first half of the cycle and ball 2 for the second.
    pub fn draw_order(&self) -> [&BallDraw; 2] {
        if self.progress >= 0.0 {
            [&self.ball1, &self.ball2]
        } else {
            [&self.ball2, &self.ball1]
        }
    }

    pub fn draw_on<S: Surface + ?Sized>(&self, surface: &mut S) {
        for ball in self.draw_order() {
            surface.draw_circle(
                ball.color,
                ball.center(),
                ball.scaled_radius(),
                BlendMode::Multiply,
            );
        }
    }
}

fn sanitize(elapsed_ms: f64) -> f64 {
    if elapsed_ms.is_finite() {
        elapsed_ms.max(0.0)
    } else {
        0.0
    }
}

/// Sawtooth in `[-1, 1)` restarting every [`CYCLE_MS`].
fn progress(elapsed_ms: f64) -> f32 {
    let phase = sanitize(elapsed_ms).rem_euclid(CYCLE_MS) / CYCLE_MS * 2.0;
    (phase - 1.0) as f32
}

/// Triangle wave rising 0 to 1 over [`TRANSLATION_MS`] and falling back over the next.
fn translation_phase(elapsed_ms: f64) -> f32 {
    let t = sanitize(elapsed_ms).rem_euclid(TRANSLATION_MS * 2.0) / TRANSLATION_MS;
    let phase = if t <= 1.0 { t } else { 2.0 - t };
    phase as f32
}

/// Draw parameters of both balls at `elapsed_ms`.
pub fn compute_frame(elapsed_ms: f64, config: &SpinnerConfig) -> FrameOutput {
    let progress = progress(elapsed_ms);
    let radius = config.ball_radius();
    let offset_x1 = radius * 2.0 * translation_phase(elapsed_ms);
    let offset_x2 = -offset_x1;
    let levels = config.levels();

    FrameOutput {
        progress,
        ball1: BallDraw {
            center_offset_x: offset_x1,
            radius,
            scale: scale_curve1(progress, levels),
            color: config.color1(),
        },
        ball2: BallDraw {
            center_offset_x: radius * 3.0 + offset_x2,
            radius,
            scale: scale_curve2(progress, levels),
            color: config.color2(),
        },
    }
}
