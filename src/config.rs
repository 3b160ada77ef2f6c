use std::{fs, io, path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{event, Level};

use crate::{animation::ScaleLevels, color::Rgb};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("base length must be a positive finite number, got {0}")]
    BaseLength(f32),
    #[error("scale range step must be in (0, {limit}), got {step}")]
    ScaleRangeStep { step: f32, limit: f32 },
    #[error("frame rate must be in 1..=240, got {0}")]
    FrameRate(u32),
    #[error("invalid color {0:?}, expected #RRGGBB")]
    Color(String),
}

/// Immutable parameters of one spinner.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinnerConfig {
    base_length: f32,
    scale_range_step: f32,
    color1: Rgb,
    color2: Rgb,
}

impl SpinnerConfig {
    pub fn new(
        base_length: f32,
        scale_range_step: f32,
        color1: Rgb,
        color2: Rgb,
    ) -> Result<Self, ConfigError> {
        if !(base_length.is_finite() && base_length > 0.0) {
            return Err(ConfigError::BaseLength(base_length));
        }
        // the smallest ball must keep a positive radius
        let limit = ScaleLevels::MAX / 2.0;
        if !(scale_range_step > 0.0 && scale_range_step < limit) {
            return Err(ConfigError::ScaleRangeStep {
                step: scale_range_step,
                limit,
            });
        }
        Ok(Self {
            base_length,
            scale_range_step,
            color1,
            color2,
        })
    }

    /// Ball diameter in logical units.
    pub fn base_length(&self) -> f32 {
        self.base_length
    }

    pub fn ball_radius(&self) -> f32 {
        self.base_length / 2.0
    }

    pub fn levels(&self) -> ScaleLevels {
        ScaleLevels::from_step(self.scale_range_step)
    }

    pub fn color1(&self) -> Rgb {
        self.color1
    }

    pub fn color2(&self) -> Rgb {
        self.color2
    }
}

/// Everything the preview needs: the spinner plus the host's background and frame rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub spinner: SpinnerConfig,
    pub background: Rgb,
    pub frame_interval: Duration,
}

#[derive(Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    base_length: f32,
    scale_range_step: f32,
    color1: String,
    color2: String,
    background: String,
    fps: u32,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            base_length: Settings::BASE_LENGTH,
            scale_range_step: Settings::SCALE_RANGE_STEP,
            color1: Settings::COLOR1.to_string(),
            color2: Settings::COLOR2.to_string(),
            background: Rgb::WHITE.to_string(),
            fps: Settings::FPS,
        }
    }
}

impl TryFrom<SettingsFile> for Settings {
    type Error = ConfigError;

    fn try_from(file: SettingsFile) -> Result<Self, Self::Error> {
        if !(1..=Settings::MAX_FPS).contains(&file.fps) {
            return Err(ConfigError::FrameRate(file.fps));
        }
        Ok(Self {
            spinner: SpinnerConfig::new(
                file.base_length,
                file.scale_range_step,
                file.color1.parse()?,
                file.color2.parse()?,
            )?,
            background: file.background.parse()?,
            frame_interval: Duration::from_secs(1) / file.fps,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spinner: SpinnerConfig {
                base_length: Settings::BASE_LENGTH,
                scale_range_step: Settings::SCALE_RANGE_STEP,
                color1: Settings::COLOR1,
                color2: Settings::COLOR2,
            },
            background: Rgb::WHITE,
            frame_interval: Duration::from_secs(1) / Settings::FPS,
        }
    }
}

impl Settings {
    pub const MAX_FPS: u32 = 240;
    const FPS: u32 = 60;
    const BASE_LENGTH: f32 = 40.0;
    const SCALE_RANGE_STEP: f32 = 0.2;
    const COLOR1: Rgb = Rgb(0xcb, 0x27, 0x90);
    const COLOR2: Rgb = Rgb(0x6b, 0xdf, 0xe0);

    /// Reads `config.json` from the config directory.
    ///
    /// A missing or malformed file falls back to the defaults, but a file
    /// holding invalid values, bad colors included, is an error.
    pub fn load() -> Result<Self> {
        let path = crate::utils::config_dir()?.join("config.json");
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                event!(Level::DEBUG, "no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                event!(Level::WARN, "failed to read {}: {err}", path.display());
                return Ok(Self::default());
            }
        };
        let file = match serde_json::from_str::<SettingsFile>(&json) {
            Ok(file) => file,
            Err(err) => {
                event!(Level::WARN, "failed to parse {}: {err}", path.display());
                return Ok(Self::default());
            }
        };
        let settings = Settings::try_from(file)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        event!(Level::INFO, "loaded config from {}", path.display());
        Ok(settings)
    }
}
