use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::render::Rgb;

/// Top-level configuration structure for the demo.
///
/// Every field is a fixed constant; [`DemoConfig::default`] is the only
/// configuration the binary ever runs with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub title: String,
    pub viewport: Viewport,
    pub stars: StarConfig,
    pub scroller: ScrollerConfig,
    /// Fixed increment added to the animation clock once per frame.
    pub clock_step: f32,
    pub frame_interval_ms: u64,
    /// How long a missing-asset error stays visible before the process exits.
    pub linger_secs: u64,
    pub music_path: String,
    pub audio: AudioConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Starfield Scroller Demo".to_string(),
            viewport: Viewport::default(),
            stars: StarConfig::default(),
            scroller: ScrollerConfig::default(),
            clock_step: 0.05,
            frame_interval_ms: 16,
            linger_secs: 5,
            music_path: "music.ogg".to_string(),
            audio: AudioConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn linger(&self) -> Duration {
        Duration::from_secs(self.linger_secs)
    }
}

/// Fixed logical dimensions of the drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarConfig {
    pub count: usize,
    pub spread: f32,
    pub focal_length: f32,
    pub max_size: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 500,
            spread: 512.0,
            focal_length: 128.0,
            max_size: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollerConfig {
    pub text: String,
    pub font_path: String,
    pub font_size: f32,
    pub color: Rgb,
    /// Pixels the banner moves left each frame.
    pub step: f32,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            text: "GREETINGS FROM A RUST DEMO... NOW WITH MUSIC, RASTER BARS AND COLOR CYCLING TEXT... ENJOY THE SHOW...".to_string(),
            font_path: "font.ttf".to_string(),
            font_size: 24.0,
            color: Rgb::new(0, 255, 0),
            step: 1.5,
        }
    }
}

/// Configuration specific to the audio subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
        }
    }
}
