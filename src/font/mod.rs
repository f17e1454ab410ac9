mod truetype;

pub use truetype::TrueTypeFont;

/// The font-rendering collaborator used by the rasterizer.
///
/// Coordinates are in canvas pixels with y growing downward. A glyph is positioned by its pen
/// origin: `x` is the left edge of the advance box and `baseline` the y of the baseline.
pub trait GlyphSource {
    /// Distance from the top of the line to the baseline.
    fn ascent(&self) -> f32;

    /// Horizontal pen advance after drawing `c`.
    fn advance(&self, c: char) -> f32;

    /// Extra horizontal adjustment between two consecutive glyphs.
    fn kern(&self, _prev: char, _next: char) -> f32 {
        0.0
    }

    /// Emit `plot(x, y, coverage)` for every pixel touched by `c`. Coverage is in `0.0..=1.0`.
    fn draw_glyph(&self, c: char, x: f32, baseline: f32, plot: &mut dyn FnMut(i32, i32, f32));
}
