/// A fixed-size 2-D grid of scalar activation values.
///
/// A value of `0` means empty/air and any value `> 0` means solid; the
/// magnitude itself is cosmetic. Cells are stored row-major (`y * width + x`).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl Grid2D {
    /// Creates a grid of the given dimensions with every cell empty.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.cells[i] = value;
    }

    /// Returns `true` if the cell holds a solid activation (`> 0`).
    #[inline]
    pub fn solid_at(&self, x: usize, y: usize) -> bool {
        self.get(x, y) > 0.0
    }

    /// Returns `true` if `(x, y)` lies on the outermost ring of cells.
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// Returns `true` if the signed coordinates address a cell of this grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Number of solid cells in the whole grid.
    pub fn solid_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v > 0.0).count()
    }

    /// Raw row-major cell slice, mainly for bit-exact comparisons in tests.
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }
}
