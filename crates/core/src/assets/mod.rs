//! Font loading and the one-off rasterisation of the scroller banner.

use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::{
    render::{Image, Rgb},
    DemoError, Result,
};

/// A TrueType/OpenType font loaded at a fixed pixel size.
pub struct FontAsset {
    font: Font,
    px: f32,
}

impl FontAsset {
    pub fn load(path: impl AsRef<Path>, px: f32) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|err| DemoError::resource("font", &shown, err))?;
        let asset = Self::from_bytes(&bytes, px).map_err(|err| match err {
            DemoError::Render(message) => DemoError::resource("font", &shown, message),
            other => other,
        })?;
        tracing::info!(path = %shown, px, "loaded font");
        Ok(asset)
    }

    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(DemoError::render)?;
        Ok(Self { font, px })
    }

    /// Rasterises `text` as a single line: RGB is `color` everywhere, alpha
    /// is glyph coverage.
    pub fn render_text(&self, text: &str, color: Rgb) -> Result<Image> {
        let line = self
            .font
            .horizontal_line_metrics(self.px)
            .ok_or_else(|| DemoError::render("font has no horizontal line metrics"))?;

        let mut pen = 0.0_f32;
        let mut glyphs = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, self.px);
            glyphs.push(RasterGlyph {
                left: pen.round() as i32 + metrics.xmin,
                bottom: metrics.ymin,
                width: metrics.width,
                height: metrics.height,
                coverage,
            });
            pen += metrics.advance_width;
        }

        compose_line(&glyphs, pen, line.ascent, line.descent, color)
    }
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset").field("px", &self.px).finish()
    }
}

/// Coverage bitmap for one glyph, positioned relative to the pen origin.
#[derive(Debug, Clone)]
pub struct RasterGlyph {
    /// Left edge in pixels from the start of the line.
    pub left: i32,
    /// Offset of the bitmap's bottom edge from the baseline, positive up.
    pub bottom: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major, top row first.
    pub coverage: Vec<u8>,
}

/// Lays glyph bitmaps onto one baseline `ascent` pixels below the top.
pub fn compose_line(
    glyphs: &[RasterGlyph],
    advance: f32,
    ascent: f32,
    descent: f32,
    color: Rgb,
) -> Result<Image> {
    let width = advance.ceil().max(0.0) as usize;
    let height = (ascent - descent).ceil().max(0.0) as usize;
    if width == 0 || height == 0 {
        return Err(DemoError::render(format!(
            "text has zero extent ({width}x{height})"
        )));
    }

    let baseline = ascent.ceil() as i32;
    let mut pixels = vec![color.with_alpha(0); width * height];
    for glyph in glyphs {
        let top = baseline - glyph.bottom - glyph.height as i32;
        for gy in 0..glyph.height {
            let y = top + gy as i32;
            if y < 0 || y >= height as i32 {
                continue;
            }
            for gx in 0..glyph.width {
                let x = glyph.left + gx as i32;
                if x < 0 || x >= width as i32 {
                    continue;
                }
                let pixel = &mut pixels[y as usize * width + x as usize];
                pixel.a = pixel.a.max(glyph.coverage[gy * glyph.width + gx]);
            }
        }
    }

    tracing::debug!(width, height, glyphs = glyphs.len(), "composed text image");
    Ok(Image::new(width, height, pixels))
}
