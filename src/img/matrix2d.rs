use super::*;

/// Row-major grayscale sample grid. Operators never mutate it, every
/// transform builds a fresh matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix2D {
    width: usize,
    height: usize,
    pixels: Vec<f64>,
}

impl Matrix2D {
    pub fn empty_with_size(width: usize, height: usize) -> Self {
        let mut pixels = Vec::<f64>::new();
        pixels.resize(width * height, 0_f64);
        Matrix2D { width, height, pixels }
    }

    pub fn empty_size_of(other: &Matrix2D) -> Self {
        Matrix2D::empty_with_size(other.w(), other.h())
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        assert!(!rows.is_empty());

        let width = rows[0].len();
        assert!(width > 0);

        let mut pixels = Vec::<f64>::with_capacity(rows.len() * width);
        for row in rows.iter() {
            assert_eq!(row.len(), width);
            pixels.extend_from_slice(&row[..]);
        }

        Matrix2D { width, height: rows.len(), pixels }
    }

    pub fn w(&self) -> usize { self.width }
    pub fn h(&self) -> usize { self.height }

    pub fn max_col(&self) -> usize { self.width - 1 }
    pub fn max_row(&self) -> usize { self.height - 1 }

    pub fn fits(&self, pos: PixelPos) -> bool {
        pos.col <= self.max_col() && pos.row <= self.max_row()
    }

    /// True iff the full 3x3 neighborhood around `pos` lies inside the grid.
    pub fn is_interior(&self, pos: PixelPos) -> bool {
        pos.row >= 1
            && pos.col >= 1
            && pos.row + 1 <= self.max_row()
            && pos.col + 1 <= self.max_col()
    }

    pub fn get_pixels_iter(&self) -> PixelsIterator {
        PixelsIterator::for_full_image(self)
    }

    pub fn pixels<'own>(&'own self) -> &'own Vec<f64> {
        &self.pixels
    }
}

impl Index<PixelPos> for Matrix2D {
    type Output = f64;

    fn index(&self, index: PixelPos) -> &Self::Output {
        if !self.fits(index) {
            panic!("pos is {:?} which is doesn't fit into {}, {}", index, self.max_col(), self.max_row());
        }
        &self.pixels[index.row * self.width + index.col]
    }
}

impl IndexMut<PixelPos> for Matrix2D {
    fn index_mut(&mut self, index: PixelPos) -> &mut Self::Output {
        if !self.fits(index) {
            panic!("pos is {:?} which is doesn't fit into {}, {}", index, self.max_col(), self.max_row());
        }
        &mut self.pixels[index.row * self.width + index.col]
    }
}

impl Index<usize> for Matrix2D {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pixels[index]
    }
}

impl IndexMut<usize> for Matrix2D {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.pixels[index]
    }
}
