use crate::{
    config::Viewport,
    render::{cycle, Canvas, Image, Rgb},
};

/// Horizontally scrolling text banner with a sine-wave bob and a colour
/// cycling tint.
#[derive(Debug)]
pub struct Scroller {
    image: Image,
    viewport: Viewport,
    x: f32,
}

impl Scroller {
    /// Starts the banner just past the right edge.
    pub fn new(image: Image, viewport: Viewport) -> Self {
        let x = viewport.width as f32;
        Self::at(image, viewport, x)
    }

    pub fn at(image: Image, viewport: Viewport, x: f32) -> Self {
        Self { image, viewport, x }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn text_width(&self) -> usize {
        self.image.width()
    }

    pub fn text_height(&self) -> usize {
        self.image.height()
    }

    /// Moves left by `step`; once the text has fully left the screen it
    /// re-enters from `viewport_width`.
    pub fn advance(&mut self, step: f32, viewport_width: usize) {
        self.x -= step;
        if self.x < -(self.text_width() as f32) {
            self.x = viewport_width as f32;
        }
    }

    pub fn tint(&self, t: f32) -> Rgb {
        cycle(t)
    }

    pub fn vertical_offset(&self, t: f32) -> f32 {
        (t * 2.0).sin() * (self.viewport.height / 20) as f32
    }

    /// Top edge of the banner: vertically centred, then bobbed.
    pub fn top(&self, t: f32) -> i32 {
        let base = (self.viewport.height / 2) as i32 - (self.text_height() / 2) as i32;
        (base as f32 + self.vertical_offset(t)) as i32
    }

    pub fn draw(&self, canvas: &mut Canvas, t: f32) {
        canvas.copy_image(&self.image, self.x as i32, self.top(t), self.tint(t));
    }
}
