pub mod filter_trait;
pub mod histogram;
pub mod linear;
pub mod non_linear;
pub mod pointwise;

use self::filter_trait::WindowFilter;
use super::PixelPos;
use crate::img::Matrix2D;
use crate::my_err::{MyError, Result};

pub use self::histogram::{count_histogram, cumulative_histogram, equalize_hist_at, histogram, EqualizeHist, HistBuf};
pub use self::linear::{gradient_magnitude, laplacian_filter, mean_filter, GradientMagnitude, KernelFilter, MeanFilter};
pub use self::non_linear::{median_filter, MedianFilter};
pub use self::pointwise::{gamma_correction, GammaCorrection, DEFAULT_GAMMA};

pub type FilterBase = Box<dyn self::filter_trait::WindowFilter>;

pub struct FilterIterator {
    width: usize,
    height: usize,
    cur_pos: PixelPos,
}

impl FilterIterator {
    pub fn fits(&self, pos: PixelPos) -> bool {
        pos.col < self.width && pos.row < self.height
    }
}

impl Iterator for FilterIterator {
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

/// Evaluates a window filter at a single position. The window must lie
/// fully inside the image, positions closer to the border fail with
/// `OutOfBounds` instead of reading padded or wrapped samples.
pub fn eval_window_at<F: WindowFilter + ?Sized>(img: &Matrix2D, pos: PixelPos, filter: &F) -> Result<f64> {
    assert!(filter.w() > 1);
    assert!(filter.h() > 1);

    let fil_half_size = PixelPos::new(filter.h() / 2, filter.w() / 2);

    let window_fits = pos.row >= fil_half_size.row
        && pos.col >= fil_half_size.col
        && pos.row + fil_half_size.row <= img.max_row()
        && pos.col + fil_half_size.col <= img.max_col();

    if !window_fits {
        return Err(MyError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            width: img.w(),
            height: img.h(),
        });
    }

    let mut pixel_buf = Vec::<f64>::new();
    pixel_buf.resize(filter.w() * filter.h(), 0_f64);

    for pos_w in filter.get_iter() {
        let buf_ind: usize = pos_w.row * filter.w() + pos_w.col;
        let pix_pos: PixelPos = pos + pos_w - fil_half_size;
        pixel_buf[buf_ind] = img[pix_pos];
    }

    Ok(filter.process_window(&mut pixel_buf[..]))
}

#[cfg(test)]
mod tests {
    use super::filter_trait::WindowFilter;
    use super::{
        equalize_hist_at, eval_window_at, gamma_correction, histogram, FilterBase,
        GradientMagnitude, KernelFilter, MeanFilter, MedianFilter,
    };
    use crate::img::{Matrix2D, PixelPos};
    use crate::my_err::MyError;

    fn sample_grid() -> Matrix2D {
        Matrix2D::from_rows(vec![
            vec![3.0, 3.0, 2.0, 1.0, 0.0],
            vec![2.0, 3.0, 4.0, 2.0, 1.0],
            vec![1.0, 2.0, 5.0, 3.0, 2.0],
            vec![0.0, 1.0, 3.0, 2.0, 1.0],
            vec![1.0, 0.0, 2.0, 3.0, 4.0],
        ])
    }

    #[test]
    fn sample_grid_center_outputs() {
        let img = sample_grid();
        let center = PixelPos::new(2, 2);

        let mean = eval_window_at(&img, center, &MeanFilter::default()).unwrap();
        assert!((mean - 25.0 / 9.0).abs() < 1e-12);

        let median = eval_window_at(&img, center, &MedianFilter::default()).unwrap();
        assert_eq!(median, 3.0);

        let laplacian = eval_window_at(&img, center, &KernelFilter::laplacian()).unwrap();
        assert_eq!(laplacian, -8.0);

        let grad = eval_window_at(&img, center, &GradientMagnitude::default()).unwrap();
        assert!((grad - 20.0_f64.sqrt()).abs() < 1e-12);

        assert_eq!(histogram(&img).unwrap(), [3, 6, 7, 6, 2, 1, 0, 0]);
        assert_eq!(equalize_hist_at(&img, 2, 2).unwrap(), 7.0);

        let gamma = gamma_correction(&img, 2, 2, 2.5).unwrap();
        assert!((gamma - 5.0_f64.powf(2.5)).abs() < 1e-12);
    }

    #[test]
    fn every_window_filter_rejects_border_positions() {
        let filters: Vec<FilterBase> = vec![
            Box::new(MeanFilter::default()) as FilterBase,
            Box::new(MedianFilter::default()) as FilterBase,
            Box::new(KernelFilter::laplacian()) as FilterBase,
            Box::new(KernelFilter::sobel_x()) as FilterBase,
            Box::new(KernelFilter::sobel_y()) as FilterBase,
            Box::new(GradientMagnitude::default()) as FilterBase,
        ];

        let img = sample_grid();
        let border_positions = [
            PixelPos::new(0, 0),
            PixelPos::new(0, 2),
            PixelPos::new(2, 0),
            PixelPos::new(4, 2),
            PixelPos::new(2, 4),
        ];

        for filter in filters.iter() {
            for pos in border_positions.iter() {
                let res = eval_window_at(&img, *pos, filter.as_ref());
                assert_eq!(
                    res,
                    Err(MyError::OutOfBounds {
                        row: pos.row,
                        col: pos.col,
                        width: 5,
                        height: 5,
                    }),
                    "{}",
                    filter.get_description()
                );
            }

            let res = eval_window_at(&img, PixelPos::new(2, 2), filter.as_ref());
            assert!(res.is_ok(), "{}", filter.get_description());
        }
    }
}
