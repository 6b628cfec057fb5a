pub mod epipolar;
pub mod roi;

pub use epipolar::{best_match, MatchResult};
pub use roi::{match_regions, match_regions_with_progress, MatchSet, RoiMatch};
