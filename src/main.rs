use std::result;

use image_ops::geometry::euclidean_distance;
use image_ops::img::filter::filter_trait::WindowFilter;
use image_ops::img::filter::{
    equalize_hist_at, eval_window_at, histogram, FilterBase, GammaCorrection, GradientMagnitude,
    KernelFilter, MeanFilter, MedianFilter,
};
use image_ops::img::{Matrix2D, PixelPos};
use image_ops::my_err::MyError;

// 5x5 sample image, 3-bit values
fn sample_image() -> Matrix2D {
    Matrix2D::from_rows(vec![
        vec![3.0, 3.0, 2.0, 1.0, 0.0],
        vec![2.0, 3.0, 4.0, 2.0, 1.0],
        vec![1.0, 2.0, 5.0, 3.0, 2.0],
        vec![0.0, 1.0, 3.0, 2.0, 1.0],
        vec![1.0, 0.0, 2.0, 3.0, 4.0],
    ])
}

fn main() -> result::Result<(), MyError> {
    let image = sample_image();
    let center = PixelPos::new(2, 2);

    let window_filters: Vec<FilterBase> = vec![
        Box::new(MeanFilter::default()) as FilterBase,
        Box::new(MedianFilter::default()) as FilterBase,
        Box::new(KernelFilter::laplacian()) as FilterBase,
        Box::new(GradientMagnitude::default()) as FilterBase,
    ];

    for filter in window_filters.iter() {
        let value = eval_window_at(&image, center, filter.as_ref())?;
        println!("{}: {}", filter.get_description(), value);
    }

    println!(
        "Euclidean distance (2,2) to (4,3): {}",
        euclidean_distance(2.0, 2.0, 4.0, 3.0)
    );

    println!("Histogram: {:?}", histogram(&image)?);

    println!(
        "Histogram equalization at (2,2): {}",
        equalize_hist_at(&image, center.row, center.col)?
    );

    let gamma = GammaCorrection::default();
    println!(
        "{} at (2,2): {}",
        gamma.get_description(),
        gamma.process_at(&image, center)?
    );

    Ok(())
}
