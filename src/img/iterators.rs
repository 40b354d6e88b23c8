use super::{Matrix2D, PixelPos};

/// Walks every position of a matrix in row-major order.
pub struct PixelsIterator {
    width: usize,
    height: usize,
    cur_pos: PixelPos,
}

impl PixelsIterator {
    pub fn for_full_image(img: &Matrix2D) -> Self {
        PixelsIterator {
            width: img.w(),
            height: img.h(),
            cur_pos: PixelPos::default(),
        }
    }

    fn fits(&self, pos: PixelPos) -> bool {
        pos.col < self.width && pos.row < self.height
    }
}

impl Iterator for PixelsIterator {
    type Item = PixelPos;

    fn next(&mut self) -> Option<PixelPos> {
        let curr = self.cur_pos;

        self.cur_pos.col += 1;

        if self.cur_pos.col >= self.width {
            self.cur_pos.col = 0;
            self.cur_pos.row += 1;
        }

        if self.fits(curr) {
            Some(curr)
        } else {
            None
        }
    }
}
