use super::filter_trait::WindowFilter;
use super::{eval_window_at, FilterIterator};
use crate::img::{Matrix2D, PixelPos};
use crate::my_err::Result;

/// Elementwise-multiply-and-sum against a fixed coefficient matrix.
#[derive(Clone)]
pub struct KernelFilter {
    width: usize,
    height: usize,
    coeffs: Vec<f64>,
    name: String,
}

impl KernelFilter {
    pub fn with_coeffs(coeffs: Vec<f64>, width: usize, height: usize, name: &str) -> Self {
        assert!(width > 0);
        assert!(height > 0);
        assert_eq!(coeffs.len(), width * height);

        KernelFilter {
            width,
            height,
            coeffs,
            name: name.to_string(),
        }
    }

    pub fn box_mean() -> Self {
        let coeff = 1.0 / 9.0;
        KernelFilter::with_coeffs(vec![coeff; 9], 3, 3, "Box mean kernel")
    }

    pub fn laplacian() -> Self {
        let coeffs: Vec<f64> = vec![
            0.0, 1.0, 0.0,
            1.0, -4.0, 1.0,
            0.0, 1.0, 0.0,
        ];
        KernelFilter::with_coeffs(coeffs, 3, 3, "Laplacian filter")
    }

    pub fn sobel_x() -> Self {
        let coeffs: Vec<f64> = vec![
            -1.0, 0.0, 1.0,
            -2.0, 0.0, 2.0,
            -1.0, 0.0, 1.0,
        ];
        KernelFilter::with_coeffs(coeffs, 3, 3, "Sobel derivative by X")
    }

    pub fn sobel_y() -> Self {
        let coeffs: Vec<f64> = vec![
            -1.0, -2.0, -1.0,
            0.0, 0.0, 0.0,
            1.0, 2.0, 1.0,
        ];
        KernelFilter::with_coeffs(coeffs, 3, 3, "Sobel derivative by Y")
    }
}

impl WindowFilter for KernelFilter {
    fn process_window(&self, window_buffer: &mut [f64]) -> f64 {
        let mut sum: f64 = 0_f64;

        for pos in self.get_iter() {
            let ind = pos.row * self.width + pos.col;
            sum += window_buffer[ind] * self.coeffs[ind];
        }

        sum
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

#[derive(Clone)]
pub struct MeanFilter {
    width: usize,
    height: usize,
    name: String,
}

impl MeanFilter {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 1);
        assert!(height > 1);

        MeanFilter {
            width,
            height,
            name: "Mean filter".to_string(),
        }
    }
}

impl WindowFilter for MeanFilter {
    fn process_window(&self, window_buffer: &mut [f64]) -> f64 {
        let sum: f64 = window_buffer.iter().copied().sum();
        sum / (self.w() * self.h()) as f64
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

impl Default for MeanFilter {
    fn default() -> Self {
        MeanFilter::new(3, 3)
    }
}

/// Local edge strength: sqrt(gx^2 + gy^2) over the Sobel derivatives.
#[derive(Clone)]
pub struct GradientMagnitude {
    dx_filter: KernelFilter,
    dy_filter: KernelFilter,
    name: String,
}

impl GradientMagnitude {
    pub fn new() -> Self {
        GradientMagnitude {
            dx_filter: KernelFilter::sobel_x(),
            dy_filter: KernelFilter::sobel_y(),
            name: "Gradient magnitude".to_string(),
        }
    }
}

impl WindowFilter for GradientMagnitude {
    fn process_window(&self, window_buffer: &mut [f64]) -> f64 {
        let gx = self.dx_filter.process_window(window_buffer);
        let gy = self.dy_filter.process_window(window_buffer);
        (gx.powi(2) + gy.powi(2)).sqrt()
    }

    fn w(&self) -> usize {
        self.dx_filter.w()
    }

    fn h(&self) -> usize {
        self.dx_filter.h()
    }

    fn get_description(&self) -> String {
        self.name.clone()
    }

    fn get_iter(&self) -> FilterIterator {
        self.dx_filter.get_iter()
    }
}

impl Default for GradientMagnitude {
    fn default() -> Self {
        GradientMagnitude::new()
    }
}

pub fn mean_filter(img: &Matrix2D, row: usize, col: usize) -> Result<f64> {
    eval_window_at(img, PixelPos::new(row, col), &MeanFilter::default())
}

pub fn laplacian_filter(img: &Matrix2D, row: usize, col: usize) -> Result<f64> {
    eval_window_at(img, PixelPos::new(row, col), &KernelFilter::laplacian())
}

pub fn gradient_magnitude(img: &Matrix2D, row: usize, col: usize) -> Result<f64> {
    eval_window_at(img, PixelPos::new(row, col), &GradientMagnitude::default())
}
