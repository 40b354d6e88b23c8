use super::FilterIterator;

/// A stateless operator reducing one window of samples to a scalar.
/// The buffer holds the window contents in row-major order and may be
/// reordered by the implementation.
pub trait WindowFilter {
    fn process_window(&self, window_buffer: &mut [f64]) -> f64;
    fn w(&self) -> usize;
    fn h(&self) -> usize;
    fn get_description(&self) -> String;
    fn get_iter(&self) -> FilterIterator;
}
