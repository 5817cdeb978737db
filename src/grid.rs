use crate::color::Color;
use crate::error::{CanvasError, CanvasResult};

/// Fixed-size square grid of cells, row-major, created fully `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: usize,
    cells: Vec<Color>,
    /// Bumped on every successful write so renderers can skip re-uploads
    revision: u64,
}

impl PixelGrid {
    /// Largest side length; every cell stays addressable with `i32` coordinates
    pub const MAX_SIZE: usize = 4096;

    /// # Panics
    /// If `size` exceeds [`Self::MAX_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            size <= Self::MAX_SIZE,
            "grid size {size} exceeds the maximum of {}",
            Self::MAX_SIZE
        );
        Self {
            size,
            cells: vec![Color::Empty; size * size],
            revision: 0,
        }
    }

    /// Side length N of the grid
    pub fn dimensions(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        let in_axis = |v: i32| usize::try_from(v).is_ok_and(|v| v < self.size);
        in_axis(x) && in_axis(y)
    }

    fn index(&self, x: i32, y: i32) -> CanvasResult<usize> {
        if !self.contains(x, y) {
            return Err(CanvasError::OutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y as usize * self.size + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> CanvasResult<Color> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Overwrite one cell. Nothing is written when the coordinate is rejected.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> CanvasResult<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = color;
        self.revision += 1;
        Ok(())
    }

    pub fn clear(&mut self, x: i32, y: i32) -> CanvasResult<()> {
        self.set(x, y, Color::Empty)
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of cells holding an opaque color
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}
