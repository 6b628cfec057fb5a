pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod region;
pub mod search;
pub mod ssd;
pub mod stitch;
