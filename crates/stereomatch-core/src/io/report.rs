use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frame::Rect;
use crate::search::{MatchResult, MatchSet};

/// Serializable summary of a match set, one entry per ROI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(default)]
    pub entries: Vec<ReportEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub roi: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&MatchSet> for MatchReport {
    fn from(set: &MatchSet) -> Self {
        let entries = set
            .iter()
            .map(|e| match &e.outcome {
                Ok(m) => ReportEntry {
                    roi: e.roi,
                    matched: Some(m.clone()),
                    error: None,
                },
                Err(err) => ReportEntry {
                    roi: e.roi,
                    matched: None,
                    error: Some(err.to_string()),
                },
            })
            .collect();
        Self { entries }
    }
}

pub fn save_report(report: &MatchReport, path: &Path) -> Result<()> {
    std::fs::write(path, toml::to_string_pretty(report)?)?;
    Ok(())
}
