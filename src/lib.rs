pub mod geometry;
pub mod img;
pub mod my_err;

pub use geometry::euclidean_distance;
pub use img::{Matrix2D, PixelPos};
pub use my_err::MyError;
