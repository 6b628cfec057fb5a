mod common;

use approx::assert_relative_eq;
use ndarray::Array2;
use proptest::prelude::*;

use stereomatch_core::error::StereoError;
use stereomatch_core::frame::Rect;
use stereomatch_core::region::{extract_region, BoundsPolicy};
use stereomatch_core::ssd::{score_regions, sum_squared_differences};

use common::textured;

#[test]
fn test_known_value() {
    let a = Array2::from_shape_vec((2, 2), vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
    let b = Array2::from_shape_vec((2, 2), vec![1.0f32, 0.0, 5.0, 1.0]).unwrap();
    // 0 + 4 + 4 + 9
    assert_eq!(sum_squared_differences(a.view(), b.view()).unwrap(), 17.0);
}

#[test]
fn test_self_score_is_zero() {
    let frame = textured(16, 16);
    let region = extract_region(&frame, Rect::new(3, 4, 5, 5), BoundsPolicy::Reject).unwrap();
    assert_eq!(score_regions(&region, &region).unwrap(), 0.0);
}

#[test]
fn test_size_mismatch_is_not_a_score() {
    let a = Array2::<f32>::zeros((3, 3));
    let b = Array2::<f32>::zeros((3, 2));
    let err = sum_squared_differences(a.view(), b.view()).unwrap_err();
    assert!(matches!(
        err,
        StereoError::SizeMismatch {
            a_width: 3,
            a_height: 3,
            b_width: 2,
            b_height: 3,
        }
    ));
}

#[test]
fn test_transposed_shape_mismatch() {
    let a = Array2::<f32>::zeros((2, 3));
    let b = Array2::<f32>::zeros((3, 2));
    assert!(sum_squared_differences(a.view(), b.view()).is_err());
}

#[test]
fn test_large_differences_accumulate_in_f64() {
    let a = Array2::<f32>::from_elem((64, 64), 1.0e4);
    let b = Array2::<f32>::zeros((64, 64));
    let score = sum_squared_differences(a.view(), b.view()).unwrap();
    assert_relative_eq!(score, 64.0 * 64.0 * 1.0e8, max_relative = 1e-12);
}

fn block_pair() -> impl Strategy<Value = (Array2<f32>, Array2<f32>)> {
    (1usize..8, 1usize..8).prop_flat_map(|(h, w)| {
        let n = h * w;
        (
            prop::collection::vec(-100.0f32..100.0, n),
            prop::collection::vec(-100.0f32..100.0, n),
        )
            .prop_map(move |(a, b)| {
                (
                    Array2::from_shape_vec((h, w), a).unwrap(),
                    Array2::from_shape_vec((h, w), b).unwrap(),
                )
            })
    })
}

proptest! {
    #[test]
    fn prop_self_score_is_zero((a, _) in block_pair()) {
        prop_assert_eq!(sum_squared_differences(a.view(), a.view()).unwrap(), 0.0);
    }

    #[test]
    fn prop_symmetric((a, b) in block_pair()) {
        let ab = sum_squared_differences(a.view(), b.view()).unwrap();
        let ba = sum_squared_differences(b.view(), a.view()).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_non_negative((a, b) in block_pair()) {
        prop_assert!(sum_squared_differences(a.view(), b.view()).unwrap() >= 0.0);
    }

    #[test]
    fn prop_summation_order_invariant((a, b) in block_pair()) {
        let row_major = sum_squared_differences(a.view(), b.view()).unwrap();
        // Transposed views iterate the same pixels column by column.
        let col_major = sum_squared_differences(a.t(), b.t()).unwrap();
        let tolerance = 1e-9 * row_major.max(1.0);
        prop_assert!((row_major - col_major).abs() <= tolerance);
    }
}
