/// A row-major 2D raster with explicit dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Grayscale pixel brightness, 255 is white background.
pub type BrightnessGrid = Grid<u8>;

/// Per-pixel MIDI note velocity.
pub type VelocityGrid = Grid<i8>;

impl<T: Copy> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Builds a grid from a list of rows. All rows must share the same length.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);

        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        Some(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + column])
    }

    pub fn set(&mut self, row: usize, column: usize, value: T) {
        if row < self.height && column < self.width {
            self.cells[row * self.width + column] = value;
        }
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Iterates one column top-to-bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = T> + '_ {
        self.cells
            .iter()
            .skip(column)
            .step_by(self.width.max(1))
            .take(if column < self.width { self.height } else { 0 })
            .copied()
    }

    /// Applies `f` to every cell, keeping the dimensions.
    pub fn map<U, F: FnMut(T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().copied().map(f).collect(),
        }
    }
}
