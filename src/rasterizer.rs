use crate::error::{Error, Result};
use crate::font::GlyphSource;
use crate::model::grid::BrightnessGrid;
use log::debug;

pub const CANVAS_HEIGHT: usize = 20;
pub const FONT_SIZE_PX: f32 = 20.0;

/// Horizontal pixels reserved per character, and per margin slot on either side.
const CELL_WIDTH: usize = 10;
const MARGIN_CELLS: usize = 2;
const PEN_START_X: f32 = 1.0;

const BACKGROUND: u8 = 255;
const FOREGROUND: u8 = 0;

/// How glyph coverage becomes pixel brightness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Threshold coverage at one half so every pixel is pure black or pure white.
    #[default]
    Binary,

    /// Keep intermediate grays on glyph edges.
    Antialiased,
}

impl RenderMode {
    fn shade(self, coverage: f32) -> u8 {
        let coverage = coverage.clamp(0.0, 1.0);
        match self {
            RenderMode::Binary if coverage >= 0.5 => FOREGROUND,
            RenderMode::Binary => BACKGROUND,
            RenderMode::Antialiased => (255.0 * (1.0 - coverage)).round() as u8,
        }
    }
}

/// Canvas width for `text`: one cell per character plus the margins.
pub fn canvas_width(text: &str) -> usize {
    CELL_WIDTH * (text.chars().count() + MARGIN_CELLS)
}

/// Render `text` black-on-white onto a fixed height canvas, one word at a time, left aligned.
///
/// Each word starts on its own fixed grid slot, so the layout depends on character counts
/// rather than on the font's metrics; only the glyph shapes inside a word come from `font`.
pub fn rasterize(text: &str, font: &dyn GlyphSource, mode: RenderMode) -> Result<BrightnessGrid> {
    if text.contains('\0') {
        return Err(Error::InvalidInput(
            "text must not contain NUL characters".into(),
        ));
    }

    let width = canvas_width(text);
    let mut canvas = BrightnessGrid::filled(width, CANVAS_HEIGHT, BACKGROUND);
    let baseline = font.ascent();

    let mut pen = PEN_START_X;
    for word in text.split_whitespace() {
        debug!("Drawing '{}' at x={}", word, pen);
        draw_word(&mut canvas, word, pen, baseline, font, mode);
        pen += (CELL_WIDTH * (word.chars().count() + 1)) as f32;
    }

    debug!(
        "Rasterized {} chars onto a {}x{} canvas",
        text.chars().count(),
        canvas.width(),
        canvas.height()
    );

    Ok(canvas)
}

fn draw_word(
    canvas: &mut BrightnessGrid,
    word: &str,
    origin_x: f32,
    baseline: f32,
    font: &dyn GlyphSource,
    mode: RenderMode,
) {
    let mut x = origin_x;
    let mut prev: Option<char> = None;

    for c in word.chars() {
        if let Some(p) = prev {
            x += font.kern(p, c);
        }

        font.draw_glyph(c, x, baseline, &mut |px, py, coverage| {
            if px < 0 || py < 0 {
                return;
            }
            let (column, row) = (px as usize, py as usize);
            let shade = mode.shade(coverage);

            // Overlapping glyphs keep the darker pixel.
            if let Some(current) = canvas.get(row, column)
                && shade < current
            {
                canvas.set(row, column, shade);
            }
        });

        x += font.advance(c);
        prev = Some(c);
    }
}
