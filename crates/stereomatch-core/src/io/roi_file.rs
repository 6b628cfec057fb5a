use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StereoError};
use crate::frame::Rect;

/// A saved list of ROIs on the left view.
///
/// ```toml
/// [[rois]]
/// x = 12
/// y = 40
/// width = 9
/// height = 9
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoiList {
    #[serde(default)]
    pub rois: Vec<Rect>,
}

impl RoiList {
    pub fn from_toml(s: &str) -> Result<Self> {
        let list: RoiList = toml::from_str(s)?;
        for roi in &list.rois {
            if roi.is_empty() {
                return Err(StereoError::InvalidRoi(format!("{roi} has zero area")));
            }
        }
        Ok(list)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn load_rois(path: &Path) -> Result<RoiList> {
    let contents = std::fs::read_to_string(path)?;
    RoiList::from_toml(&contents)
}

pub fn save_rois(list: &RoiList, path: &Path) -> Result<()> {
    std::fs::write(path, list.to_toml()?)?;
    Ok(())
}

/// Parse a ROI from `x,y,width,height`.
pub fn parse_roi(s: &str) -> Result<Rect> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| StereoError::InvalidRoi(format!("'{s}': {e}")))?;

    let [x, y, width, height] = parts[..] else {
        return Err(StereoError::InvalidRoi(format!(
            "'{s}': expected x,y,width,height"
        )));
    };
    let rect = Rect::new(x, y, width, height);
    if rect.is_empty() {
        return Err(StereoError::InvalidRoi(format!("'{s}': zero area")));
    }
    Ok(rect)
}
