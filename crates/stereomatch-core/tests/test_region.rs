mod common;

use stereomatch_core::error::StereoError;
use stereomatch_core::frame::Rect;
use stereomatch_core::region::{extract_region, BoundsPolicy};

use common::{frame_from_fn, textured};

#[test]
fn test_extract_copies_pixels() {
    let frame = frame_from_fn(6, 4, |r, c| (r * 10 + c) as f32);
    let region = extract_region(&frame, Rect::new(2, 1, 3, 2), BoundsPolicy::Clip).unwrap();

    assert_eq!(region.rect, Rect::new(2, 1, 3, 2));
    assert_eq!(region.width(), 3);
    assert_eq!(region.height(), 2);
    assert_eq!(region.data[[0, 0]], 12.0);
    assert_eq!(region.data[[0, 2]], 14.0);
    assert_eq!(region.data[[1, 0]], 22.0);
    assert_eq!(region.data[[1, 2]], 24.0);
}

#[test]
fn test_region_is_independent_of_source() {
    let mut frame = textured(8, 8);
    let region = extract_region(&frame, Rect::new(1, 1, 3, 3), BoundsPolicy::Reject).unwrap();
    let before = region.data[[0, 0]];

    frame.data[[1, 1]] = 42.0;
    assert_eq!(region.data[[0, 0]], before);
}

#[test]
fn test_clip_at_last_column() {
    let frame = textured(10, 5);
    let region = extract_region(&frame, Rect::new(9, 1, 3, 3), BoundsPolicy::Clip).unwrap();

    assert_eq!(region.rect, Rect::new(9, 1, 1, 3));
    assert_eq!(region.width(), 1);
    assert_eq!(region.height(), 3);
    assert_eq!(region.data[[0, 0]], frame.data[[1, 9]]);
}

#[test]
fn test_clip_bottom_right_corner() {
    let frame = textured(10, 5);
    let region = extract_region(&frame, Rect::new(8, 3, 5, 5), BoundsPolicy::Clip).unwrap();
    assert_eq!(region.rect, Rect::new(8, 3, 2, 2));
}

#[test]
fn test_reject_at_last_column() {
    let frame = textured(10, 5);
    let err = extract_region(&frame, Rect::new(9, 1, 3, 3), BoundsPolicy::Reject).unwrap_err();
    assert!(
        matches!(
            err,
            StereoError::OutOfBounds {
                image_width: 10,
                image_height: 5,
                ..
            }
        ),
        "got: {err}"
    );
}

#[test]
fn test_reject_accepts_exact_fit() {
    let frame = textured(10, 5);
    let region = extract_region(&frame, Rect::new(7, 2, 3, 3), BoundsPolicy::Reject).unwrap();
    assert_eq!(region.rect, Rect::new(7, 2, 3, 3));
}

#[test]
fn test_origin_outside_fails_under_both_policies() {
    let frame = textured(10, 5);
    for policy in [BoundsPolicy::Clip, BoundsPolicy::Reject] {
        let err = extract_region(&frame, Rect::new(10, 0, 2, 2), policy).unwrap_err();
        assert!(matches!(err, StereoError::OutOfBounds { .. }), "got: {err}");
        let err = extract_region(&frame, Rect::new(0, 5, 2, 2), policy).unwrap_err();
        assert!(matches!(err, StereoError::OutOfBounds { .. }), "got: {err}");
    }
}

#[test]
fn test_zero_area_is_invalid() {
    let frame = textured(10, 5);
    let err = extract_region(&frame, Rect::new(1, 1, 0, 3), BoundsPolicy::Clip).unwrap_err();
    assert!(matches!(
        err,
        StereoError::InvalidDimensions {
            width: 0,
            height: 3
        }
    ));
}

#[test]
fn test_rect_intersect() {
    assert_eq!(
        Rect::new(2, 2, 4, 4).intersect(5, 5),
        Some(Rect::new(2, 2, 3, 3))
    );
    assert_eq!(Rect::new(5, 0, 1, 1).intersect(5, 5), None);
    assert_eq!(Rect::new(0, 0, 0, 1).intersect(5, 5), None);
    assert!(Rect::new(0, 0, 5, 5).fits_within(5, 5));
    assert!(!Rect::new(1, 0, 5, 5).fits_within(5, 5));
}

#[test]
fn test_rect_display() {
    assert_eq!(Rect::new(3, 2, 4, 5).to_string(), "(3,2 4x5)");
}

#[test]
fn test_rect_edges_saturate() {
    let r = Rect::new(usize::MAX, 1, 2, 2);
    assert_eq!(r.right(), usize::MAX);
    assert!(!r.fits_within(10, 10));
    assert!(r.intersect(10, 10).is_none());

    let wide = Rect::new(1, 1, usize::MAX, 2);
    assert!(!wide.fits_within(10, 10));
    assert_eq!(wide.intersect(10, 10), Some(Rect::new(1, 1, 9, 2)));
}

#[test]
fn test_extract_huge_rect_is_out_of_bounds_or_clipped() {
    let frame = textured(10, 6);

    for policy in [BoundsPolicy::Clip, BoundsPolicy::Reject] {
        let err = extract_region(&frame, Rect::new(usize::MAX, 1, 2, 2), policy).unwrap_err();
        assert!(matches!(err, StereoError::OutOfBounds { .. }), "{policy}: {err}");
    }

    let huge = Rect::new(1, 1, usize::MAX, 2);
    let err = extract_region(&frame, huge, BoundsPolicy::Reject).unwrap_err();
    assert!(matches!(err, StereoError::OutOfBounds { .. }));
    let clipped = extract_region(&frame, huge, BoundsPolicy::Clip).unwrap();
    assert_eq!(clipped.rect, Rect::new(1, 1, 9, 2));
}
