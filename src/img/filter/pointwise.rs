use crate::img::{Matrix2D, PixelPos};
use crate::my_err::{MyError, Result};

pub const DEFAULT_GAMMA: f64 = 2.5;

/// Power-law remapping of a single sample. No neighborhood access, the
/// coordinate only has to lie inside the grid.
#[derive(Clone)]
pub struct GammaCorrection {
    gamma: f64,
    name: String,
}

impl GammaCorrection {
    pub fn new(gamma: f64) -> Self {
        GammaCorrection {
            gamma,
            name: "Gamma correction".to_string(),
        }
    }

    pub fn process_pixel(&self, value: f64) -> f64 {
        value.powf(self.gamma)
    }

    pub fn process_at(&self, mat: &Matrix2D, pos: PixelPos) -> Result<f64> {
        if !mat.fits(pos) {
            return Err(MyError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                width: mat.w(),
                height: mat.h(),
            });
        }

        Ok(self.process_pixel(mat[pos]))
    }

    pub fn get_description(&self) -> String {
        format!("{} (gamma = {})", &self.name, self.gamma)
    }
}

impl Default for GammaCorrection {
    fn default() -> Self {
        GammaCorrection::new(DEFAULT_GAMMA)
    }
}

pub fn gamma_correction(img: &Matrix2D, row: usize, col: usize, gamma: f64) -> Result<f64> {
    GammaCorrection::new(gamma).process_at(img, PixelPos::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::{gamma_correction, GammaCorrection};
    use crate::img::{Matrix2D, PixelPos};
    use crate::my_err::MyError;

    #[test]
    fn gamma_one_is_identity() {
        let mat = Matrix2D::from_rows(vec![vec![0.0, 3.0], vec![5.0, 7.0]]);

        for pos in mat.get_pixels_iter() {
            assert_eq!(gamma_correction(&mat, pos.row, pos.col, 1.0).unwrap(), mat[pos]);
        }
    }

    #[test]
    fn default_gamma_is_two_and_a_half() {
        let mat = Matrix2D::from_rows(vec![vec![5.0]]);

        let value = GammaCorrection::default()
            .process_at(&mat, PixelPos::new(0, 0))
            .unwrap();
        assert!((value - 5.0_f64.powf(2.5)).abs() < 1e-12);
    }

    #[test]
    fn rejects_positions_outside_grid() {
        let mat = Matrix2D::from_rows(vec![vec![1.0, 2.0]]);

        assert_eq!(
            gamma_correction(&mat, 0, 2, 2.5),
            Err(MyError::OutOfBounds {
                row: 0,
                col: 2,
                width: 2,
                height: 1,
            })
        );
    }
}
