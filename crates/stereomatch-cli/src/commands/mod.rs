pub mod config;
pub mod info;
pub mod matching;
pub mod pipeline;
pub mod stitch;
