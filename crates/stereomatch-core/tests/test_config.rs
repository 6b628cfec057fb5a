use std::path::PathBuf;

use stereomatch_core::frame::Rect;
use stereomatch_core::pipeline::config::{MatchConfig, PipelineConfig, StitchConfig, Task};
use stereomatch_core::pipeline::PipelineStage;
use stereomatch_core::region::BoundsPolicy;

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_task_display() {
    let m = Task::Match(MatchConfig {
        rois: vec![Rect::new(0, 0, 3, 3), Rect::new(5, 5, 3, 3)],
        bounds: BoundsPolicy::Reject,
        ..Default::default()
    });
    assert_eq!(m.to_string(), "Match (2 ROI(s), Reject)");
    assert_eq!(Task::Stitch(StitchConfig::default()).to_string(), "Stitch");
}

#[test]
fn test_stage_display() {
    assert_eq!(PipelineStage::Matching.to_string(), "Matching regions");
    assert_eq!(
        PipelineStage::Estimating.to_string(),
        "Estimating displacement"
    );
}

#[test]
fn test_defaults() {
    assert!(matches!(Task::default(), Task::Match(_)));
    assert_eq!(BoundsPolicy::default(), BoundsPolicy::Clip);
    let stitch = StitchConfig::default();
    assert_eq!(stitch.output, PathBuf::from("mosaic.tiff"));
    assert!(stitch.search_width.is_none());
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_match_config_from_minimal_toml() {
    let toml_str = r#"
        left = "l.png"
        right = "r.png"

        [task.Match]
        rois = [{ x = 1, y = 2, width = 3, height = 4 }]
    "#;
    let config: PipelineConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.left, PathBuf::from("l.png"));

    let Task::Match(m) = config.task else {
        panic!("expected match task");
    };
    assert_eq!(m.rois, vec![Rect::new(1, 2, 3, 4)]);
    assert_eq!(m.bounds, BoundsPolicy::Clip);
    assert!(m.rois_file.is_none());
    assert!(m.overlay.is_none());
    assert!(m.report.is_none());
}

#[test]
fn test_stitch_config_toml_roundtrip() {
    let config = PipelineConfig {
        left: PathBuf::from("a.tiff"),
        right: PathBuf::from("b.tiff"),
        task: Task::Stitch(StitchConfig {
            output: PathBuf::from("out.png"),
            search_width: Some(64),
        }),
    };
    let encoded = toml::to_string_pretty(&config).unwrap();
    let decoded: PipelineConfig = toml::from_str(&encoded).unwrap();

    let Task::Stitch(s) = decoded.task else {
        panic!("expected stitch task");
    };
    assert_eq!(s.output, PathBuf::from("out.png"));
    assert_eq!(s.search_width, Some(64));
}

#[test]
fn test_match_config_json_roundtrip() {
    let config = MatchConfig {
        rois: vec![Rect::new(7, 8, 9, 10)],
        rois_file: Some(PathBuf::from("rois.toml")),
        bounds: BoundsPolicy::Reject,
        overlay: Some(PathBuf::from("o.png")),
        report: None,
    };
    let json = serde_json::to_string(&config).unwrap();
    let decoded: MatchConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.rois, config.rois);
    assert_eq!(decoded.rois_file, config.rois_file);
    assert_eq!(decoded.bounds, BoundsPolicy::Reject);
    assert_eq!(decoded.overlay, config.overlay);
    assert!(decoded.report.is_none());
}
