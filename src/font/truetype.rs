use crate::error::{Error, Result};
use crate::font::GlyphSource;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A TrueType/OpenType font loaded from disk, scaled to a fixed pixel size.
pub struct TrueTypeFont {
    font: FontVec,
    scale: PxScale,
}

impl std::fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl TrueTypeFont {
    /// Loads the font at `path`. `size_px` is the em size in pixels.
    pub fn load<P: AsRef<Path>>(path: P, size_px: f32) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ResourceNotFound(path.to_path_buf()),
            _ => Error::InvalidFont {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        let font = FontVec::try_from_vec(bytes).map_err(|e| Error::InvalidFont {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self::from_font(font, size_px))
    }

    pub fn from_font(font: FontVec, size_px: f32) -> Self {
        // PxScale measures ascent-to-descent, so convert from an em size the same way
        // point sizes are converted.
        let scale = match font.units_per_em() {
            Some(units_per_em) => PxScale::from(size_px * font.height_unscaled() / units_per_em),
            None => PxScale::from(size_px),
        };

        debug!("Loaded font with {} glyphs at {:?}", font.glyph_count(), scale);

        Self { font, scale }
    }
}

impl GlyphSource for TrueTypeFont {
    fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }

    fn advance(&self, c: char) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        scaled.h_advance(scaled.glyph_id(c))
    }

    fn kern(&self, prev: char, next: char) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        scaled.kern(scaled.glyph_id(prev), scaled.glyph_id(next))
    }

    fn draw_glyph(&self, c: char, x: f32, baseline: f32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let glyph = self
            .font
            .glyph_id(c)
            .with_scale_and_position(self.scale, point(x, baseline));

        let Some(outlined) = self.font.outline_glyph(glyph) else {
            return;
        };

        let bounds = outlined.px_bounds();
        let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
        outlined.draw(|gx, gy, coverage| {
            plot(left + gx as i32, top + gy as i32, coverage);
        });
    }
}
