pub mod displacement;
pub mod mosaic;

pub use displacement::{estimate_shift, estimate_shift_with_width, feature_window, Displacement};
pub use mosaic::{compose, stitch, stitch_with_width, Mosaic};
