use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPos {
    pub col: usize,
    pub row: usize,
}

impl PixelPos {
    pub fn new(row: usize, col: usize) -> Self {
        PixelPos { row, col }
    }

    pub fn upper(&self) -> Self {
        PixelPos::new(self.row - 1, self.col)
    }
    pub fn downer(&self) -> Self {
        PixelPos::new(self.row + 1, self.col)
    }
    pub fn lefter(&self) -> Self {
        PixelPos::new(self.row, self.col - 1)
    }
    pub fn righter(&self) -> Self {
        PixelPos::new(self.row, self.col + 1)
    }
}

impl Default for PixelPos {
    fn default() -> Self {
        PixelPos { col: 0, row: 0 }
    }
}

impl Add for PixelPos {
    type Output = PixelPos;

    fn add(self, rhs: Self) -> Self::Output {
        PixelPos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for PixelPos {
    type Output = PixelPos;

    fn sub(self, rhs: Self) -> Self::Output {
        PixelPos::new(self.row - rhs.row, self.col - rhs.col)
    }
}
