/// Side length of the square feature window used for displacement estimation.
pub const FEATURE_SIZE: usize = 3;

/// Horizontal position of the feature window as a fraction of the left width.
/// 0.75 places it in the center of the right half, where the overlap with the
/// next view of a rightward pan is expected.
pub const FEATURE_X_FRACTION: f64 = 0.75;

/// Vertical position of the feature window as a fraction of the left height.
pub const FEATURE_Y_FRACTION: f64 = 0.5;

/// Minimum scan work (candidates * region area) to score candidates with Rayon.
pub const PARALLEL_CANDIDATE_THRESHOLD: usize = 65_536;

/// Minimum ROI count to match ROIs with Rayon.
pub const PARALLEL_ROI_THRESHOLD: usize = 4;

/// Overlay outline color for user selections (yellow).
pub const SELECTION_COLOR: [u8; 3] = [255, 255, 0];

/// Overlay outline color for matches (green).
pub const MATCH_COLOR: [u8; 3] = [0, 255, 0];
