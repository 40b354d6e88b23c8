use super::filter_trait::WindowFilter;
use super::{eval_window_at, FilterIterator};
use crate::img::{Matrix2D, PixelPos};
use crate::my_err::Result;

#[derive(Clone)]
pub struct MedianFilter {
    width: usize,
    height: usize,
    name: String,
}

impl MedianFilter {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 1);
        assert!(height > 1);
        // odd sample count, the middle element is the median with no averaging
        assert_eq!((width * height) % 2, 1);

        MedianFilter {
            width,
            height,
            name: "Median filter".to_string(),
        }
    }
}

impl WindowFilter for MedianFilter {
    fn process_window(&self, window_buffer: &mut [f64]) -> f64 {
        window_buffer.sort_unstable_by(f64::total_cmp);
        window_buffer[window_buffer.len() / 2]
    }

    fn w(&self) -> usize {
        self.width
    }

    fn h(&self) -> usize {
        self.height
    }

    fn get_description(&self) -> String {
        format!("{} {}x{}", &self.name, self.h(), self.w())
    }

    fn get_iter(&self) -> FilterIterator {
        FilterIterator {
            width: self.w(),
            height: self.h(),
            cur_pos: PixelPos::default(),
        }
    }
}

impl Default for MedianFilter {
    fn default() -> Self {
        MedianFilter::new(3, 3)
    }
}

pub fn median_filter(img: &Matrix2D, row: usize, col: usize) -> Result<f64> {
    eval_window_at(img, PixelPos::new(row, col), &MedianFilter::default())
}

#[cfg(test)]
mod tests {
    use super::{median_filter, MedianFilter};
    use crate::img::filter::filter_trait::WindowFilter;
    use crate::img::Matrix2D;

    #[test]
    fn nine_distinct_values_give_fifth_smallest() {
        let mut window = [7.0, 1.0, 4.0, 0.0, 6.0, 2.0, 5.0, 3.0, 6.5];
        let median = MedianFilter::default().process_window(&mut window[..]);
        assert_eq!(median, 4.0);
    }

    #[test]
    fn median_of_sample_grid_center() {
        let mat = Matrix2D::from_rows(vec![
            vec![3.0, 3.0, 2.0, 1.0, 0.0],
            vec![2.0, 3.0, 4.0, 2.0, 1.0],
            vec![1.0, 2.0, 5.0, 3.0, 2.0],
            vec![0.0, 1.0, 3.0, 2.0, 1.0],
            vec![1.0, 0.0, 2.0, 3.0, 4.0],
        ]);

        assert_eq!(median_filter(&mat, 2, 2).unwrap(), 3.0);
    }

    #[test]
    fn constant_window_keeps_its_value() {
        let mut window = [2.0; 9];
        let median = MedianFilter::default().process_window(&mut window[..]);
        assert_eq!(median, 2.0);
    }
}
