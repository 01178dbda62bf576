//! Software canvas the frame loop draws into, and the seam through which a
//! finished frame reaches the screen.

mod color;

pub use color::{cycle, sine_channel, Rgb, Rgba};

use crate::{config::Viewport, Result};

/// How `fill_rect` combines the draw colour with what is already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Overwrite; alpha is ignored.
    #[default]
    None,
    /// `dst = src * a + dst * (1 - a)`.
    Blend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Immutable RGBA image, e.g. pre-rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Image {
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }
}

/// Presentation collaborator: owns the real surface and the event queue.
pub trait Presenter {
    /// Non-blocking check for a close request.
    fn poll_quit(&mut self) -> bool;

    /// Shows the finished frame.
    fn present(&mut self, canvas: &Canvas) -> Result<()>;
}

/// Framebuffer of 0x00RRGGBB pixels plus the current draw state.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
    draw_color: Rgba,
    blend: BlendMode,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            buffer: vec![0; viewport.width * viewport.height],
            draw_color: Rgb::WHITE.with_alpha(255),
            blend: BlendMode::None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        Rgb::from_pixel(self.buffer[y * self.width + x])
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    pub fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    pub fn clear(&mut self, color: Rgb) {
        self.buffer.fill(color.to_pixel());
    }

    /// Fills `rect` clipped to the canvas. Empty rects draw nothing.
    pub fn fill_rect(&mut self, rect: Rect) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let color = self.draw_color;
        for y in y0..y1 {
            let row = &mut self.buffer[y * self.width..(y + 1) * self.width];
            for pixel in &mut row[x0..x1] {
                *pixel = match self.blend {
                    BlendMode::None => color.rgb().to_pixel(),
                    BlendMode::Blend => {
                        blend(Rgb::from_pixel(*pixel), color.rgb(), color.a).to_pixel()
                    }
                };
            }
        }
    }

    /// Alpha-blends `image` with its top-left corner at `(x, y)`, scaling its
    /// RGB by `tint`. The image itself is left untouched, so the tint never
    /// accumulates between frames.
    pub fn copy_image(&mut self, image: &Image, x: i32, y: i32, tint: Rgb) {
        let dest = Rect::new(x, y, image.width() as i32, image.height() as i32);
        let Some((x0, y0, x1, y1)) = self.clip(dest) else {
            return;
        };
        for cy in y0..y1 {
            let iy = (cy as i32 - y) as usize;
            for cx in x0..x1 {
                let ix = (cx as i32 - x) as usize;
                let src = image.pixel(ix, iy);
                if src.a == 0 {
                    continue;
                }
                let idx = cy * self.width + cx;
                let dst = Rgb::from_pixel(self.buffer[idx]);
                self.buffer[idx] = blend(dst, src.rgb().modulate(tint), src.a).to_pixel();
            }
        }
    }

    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        if rect.w <= 0 || rect.h <= 0 {
            return None;
        }
        let x0 = rect.x.max(0) as i64;
        let y0 = rect.y.max(0) as i64;
        let x1 = (i64::from(rect.x) + i64::from(rect.w)).min(self.width as i64);
        let y1 = (i64::from(rect.y) + i64::from(rect.h)).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

fn blend(dst: Rgb, src: Rgb, alpha: u8) -> Rgb {
    let a = u16::from(alpha);
    let mix = |s: u8, d: u8| ((u16::from(s) * a + u16::from(d) * (255 - a)) / 255) as u8;
    Rgb::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: usize, height: usize) -> Canvas {
        Canvas::new(Viewport { width, height })
    }

    #[test]
    fn opaque_fill_overwrites_and_clips() {
        let mut canvas = canvas(4, 4);
        canvas.set_draw_color(Rgba::new(255, 0, 0, 10));
        canvas.fill_rect(Rect::new(-2, 2, 4, 10));

        assert_eq!(canvas.pixel(0, 2), Rgb::new(255, 0, 0));
        assert_eq!(canvas.pixel(1, 3), Rgb::new(255, 0, 0));
        assert_eq!(canvas.pixel(2, 2), Rgb::BLACK);
        assert_eq!(canvas.pixel(0, 1), Rgb::BLACK);
    }

    #[test]
    fn zero_sized_rect_draws_nothing() {
        let mut canvas = canvas(4, 4);
        canvas.fill_rect(Rect::new(1, 1, 0, 0));
        assert!(canvas.buffer().iter().all(|&p| p == 0));
    }

    #[test]
    fn blended_fill_mixes_with_background() {
        let mut canvas = canvas(2, 2);
        canvas.clear(Rgb::new(0, 0, 200));
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Rgba::new(255, 0, 0, 100));
        canvas.fill_rect(Rect::new(0, 0, 2, 2));

        // 255 * 100 / 255 = 100, 200 * 155 / 255 = 121
        assert_eq!(canvas.pixel(1, 1), Rgb::new(100, 0, 121));
    }

    #[test]
    fn copy_image_applies_tint_without_touching_the_image() {
        let image = Image::new(1, 1, vec![Rgba::new(0, 255, 0, 255)]);
        let snapshot = image.clone();
        let mut canvas = canvas(3, 3);

        canvas.copy_image(&image, 1, 1, Rgb::new(0, 128, 0));
        assert_eq!(canvas.pixel(1, 1), Rgb::new(0, 128, 0));
        canvas.copy_image(&image, 1, 1, Rgb::new(0, 128, 0));
        assert_eq!(canvas.pixel(1, 1), Rgb::new(0, 128, 0));
        assert_eq!(image, snapshot);
    }

    #[test]
    fn copy_image_respects_coverage_and_bounds() {
        let image = Image::new(
            2,
            1,
            vec![Rgba::new(255, 255, 255, 0), Rgba::new(255, 255, 255, 255)],
        );
        let mut canvas = canvas(2, 2);
        canvas.copy_image(&image, -1, 0, Rgb::WHITE);
        assert_eq!(canvas.pixel(0, 0), Rgb::WHITE);
        assert_eq!(canvas.pixel(1, 0), Rgb::BLACK);
    }
}
