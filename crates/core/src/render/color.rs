use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Packs into the 0x00RRGGBB layout used by the framebuffer.
    pub fn to_pixel(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    pub fn from_pixel(pixel: u32) -> Self {
        Self {
            r: (pixel >> 16) as u8,
            g: (pixel >> 8) as u8,
            b: pixel as u8,
        }
    }

    /// Channel-wise multiply, treating `self` as a 0..=255 scale factor.
    pub fn modulate(self, other: Rgb) -> Rgb {
        let scale = |a: u8, b: u8| ((u16::from(a) * u16::from(b)) / 255) as u8;
        Rgb::new(
            scale(self.r, other.r),
            scale(self.g, other.g),
            scale(self.b, other.b),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Maps a sine wave in `[-1, 1]` onto an 8-bit channel, truncating.
pub fn sine_channel(phase: f32) -> u8 {
    ((phase.sin() + 1.0) / 2.0 * 255.0) as u8
}

/// Colour cycle shared by the raster bar and the scroller tint: three sine
/// waves at phase offsets 0, 2 and 4 radians.
pub fn cycle(phase: f32) -> Rgb {
    Rgb::new(
        sine_channel(phase),
        sine_channel(phase + 2.0),
        sine_channel(phase + 4.0),
    )
}
