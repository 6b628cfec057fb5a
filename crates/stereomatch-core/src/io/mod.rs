pub mod image_io;
pub mod overlay;
pub mod report;
pub mod roi_file;
