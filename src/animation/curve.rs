/// Width of every ramp segment in progress units.
const RAMP: f32 = 0.4;

/// The three radius multipliers the balls move between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLevels {
    pub min: f32,
    pub mid: f32,
    pub max: f32,
}

impl ScaleLevels {
    pub const MAX: f32 = 1.0;

    pub fn from_step(step: f32) -> Self {
        Self {
            min: Self::MAX - step * 2.0,
            mid: Self::MAX - step,
            max: Self::MAX,
        }
    }
}

/// Where a progress value falls on the six-part schedule shared by both curves.
///
/// Segments are closed on the left and open on the right, except the last
/// one which also includes 1.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Segment {
    /// [-1, -0.6)
    First,
    /// [-0.6, -0.4)
    FirstHold,
    /// [-0.4, 0)
    Second,
    /// [0, 0.4)
    Third,
    /// [0.4, 0.6)
    SecondHold,
    /// [0.6, 1]
    Fourth,
}

impl Segment {
    fn of(progress: f32) -> Option<Self> {
        Some(match progress {
            p if (-1.0..-0.6).contains(&p) => Self::First,
            p if (-0.6..-0.4).contains(&p) => Self::FirstHold,
            p if (-0.4..0.0).contains(&p) => Self::Second,
            p if (0.0..0.4).contains(&p) => Self::Third,
            p if (0.4..0.6).contains(&p) => Self::SecondHold,
            p if (0.6..=1.0).contains(&p) => Self::Fourth,
            _ => return None,
        })
    }
}

/// Scale of the first ball: grows to `max`, holds, then shrinks through
/// `mid` down to `min`, holds, and returns to `mid`.
///
/// Anything outside `[-1, 1]` (including NaN) yields `mid`.
pub fn scale_curve1(progress: f32, levels: ScaleLevels) -> f32 {
    Segment::of(progress).map_or(levels.mid, |segment| curve1_at(segment, progress, levels))
}

/// Scale of the second ball, the mirror schedule of [`scale_curve1`]:
/// shrinks to `min` while the first ball grows, and the other way around.
pub fn scale_curve2(progress: f32, levels: ScaleLevels) -> f32 {
    Segment::of(progress).map_or(levels.mid, |segment| curve2_at(segment, progress, levels))
}

fn curve1_at(segment: Segment, progress: f32, levels: ScaleLevels) -> f32 {
    let ScaleLevels { min, mid, max } = levels;
    let gap_min_mid = mid - min;
    let gap_mid_max = max - mid;
    match segment {
        Segment::First => mid + (progress + 1.0) / RAMP * gap_mid_max,
        Segment::FirstHold => max,
        Segment::Second => max - (progress + 0.4) / RAMP * gap_mid_max,
        Segment::Third => mid - progress / RAMP * gap_min_mid,
        Segment::SecondHold => min,
        Segment::Fourth => min + (progress - 0.6) / RAMP * gap_min_mid,
    }
}

fn curve2_at(segment: Segment, progress: f32, levels: ScaleLevels) -> f32 {
    let ScaleLevels { min, mid, max } = levels;
    let gap_min_mid = mid - min;
    let gap_mid_max = max - mid;
    match segment {
        Segment::First => mid - (progress + 1.0) / RAMP * gap_min_mid,
        Segment::FirstHold => min,
        Segment::Second => min + (progress + 0.4) / RAMP * gap_min_mid,
        Segment::Third => mid + progress / RAMP * gap_mid_max,
        Segment::SecondHold => max,
        Segment::Fourth => max - (progress - 0.6) / RAMP * gap_mid_max,
    }
}
