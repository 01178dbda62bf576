use crate::{
    config::Viewport,
    render::{cycle, BlendMode, Canvas, Rect, Rgb},
};

/// Alpha of the bar, roughly 39% opaque.
pub const BAR_ALPHA: u8 = 100;

/// Colour speed relative to the animation clock.
const COLOR_RATE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarFrame {
    pub color: Rgb,
    pub y: i32,
}

/// Translucent full-width band sweeping between the top and bottom edges.
#[derive(Debug, Clone, Copy)]
pub struct RasterBar {
    viewport: Viewport,
}

impl RasterBar {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn height(&self) -> i32 {
        (self.viewport.height / 8) as i32
    }

    pub fn compute(&self, t: f32) -> BarFrame {
        let travel = self.viewport.height as f32 - self.height() as f32;
        BarFrame {
            color: cycle(t * COLOR_RATE),
            y: ((t.sin() + 1.0) / 2.0 * travel) as i32,
        }
    }

    /// Draws with blending enabled and restores opaque drawing afterwards.
    pub fn draw(&self, canvas: &mut Canvas, t: f32) {
        let frame = self.compute(t);
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(frame.color.with_alpha(BAR_ALPHA));
        canvas.fill_rect(Rect::new(
            0,
            frame.y,
            self.viewport.width as i32,
            self.height(),
        ));
        canvas.set_blend_mode(BlendMode::None);
    }
}
