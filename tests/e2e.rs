mod common;

use common::synthetic_image::{disc_u8, reference_disc};
use gradient_fill::domain::GradientDomain;
use gradient_fill::gradient::GradientOptions;
use gradient_fill::notch::NotchOptions;
use gradient_fill::region::detect_region;
use gradient_fill::{FillError, FillParams, GradientFill};

fn notch_params(half_angle_deg: f64, depth_frac: f64) -> FillParams {
    FillParams {
        notch: NotchOptions {
            enabled: true,
            half_angle_deg,
            depth_frac,
        },
        ..Default::default()
    }
}

#[test]
fn reference_disc_gets_left_to_right_ramp() {
    let before = reference_disc();
    let mut img = before.clone();

    let report = GradientFill::new(FillParams::default())
        .process(&mut img)
        .expect("disc has a white region");

    assert_eq!(
        report.domain,
        GradientDomain {
            left: 1,
            top: 1,
            side: 9
        }
    );
    assert_eq!(report.pixels_filled, report.mask_pixels);
    assert!(report.notch.is_none());

    for y in 0..10 {
        let mut prev = 0u8;
        for x in 0..10 {
            let (old, new) = (before.get(x, y), img.get(x, y));
            if old == 255 {
                assert!((150..=255).contains(&new), "({x},{y}) = {new}");
                assert!(new >= prev, "row {y} not monotone at x={x}");
                prev = new;
            } else {
                assert_eq!(new, 0, "background changed at ({x},{y})");
            }
        }
    }

    // leftmost and rightmost disc columns sit on the domain edges
    assert_eq!(img.get(1, 5), 150);
    assert_eq!(img.get(9, 5), 255);
    assert_eq!(img.get(5, 1), 203);
}

#[test]
fn notch_darkens_east_rim_only() {
    let before = reference_disc();
    let mut img = before.clone();
    let mut plain = before.clone();

    let report = GradientFill::new(notch_params(10.0, 0.2))
        .process(&mut img)
        .expect("fill");
    GradientFill::default().process(&mut plain).expect("fill");

    let notch = report.notch.expect("notch enabled");
    assert_eq!(notch.pixels_carved, 1);
    assert_eq!(img.get(9, 5), 0);

    for y in 0..10 {
        for x in 0..10 {
            if (x, y) != (9, 5) {
                assert_eq!(img.get(x, y), plain.get(x, y), "({x},{y}) differs");
            }
        }
    }
}

#[test]
fn notch_uses_original_mask_not_recoloured_values() {
    // the ramp tops out at 200, below the threshold, yet the rim is still carved
    let mut params = notch_params(10.0, 0.2);
    params.gradient.gray_max = 200;
    let mut img = reference_disc();

    let report = GradientFill::new(params).process(&mut img).expect("fill");
    assert_eq!(report.notch.map(|n| n.pixels_carved), Some(1));
    assert_eq!(img.get(9, 5), 0);
    assert_eq!(img.get(1, 5), 150);
    // t = 7/8 -> 193.75
    assert_eq!(img.get(8, 5), 194);
}

#[test]
fn mask_matches_detection_on_frozen_copy() {
    let frozen = disc_u8(24, 18, (11, 9), 7, 255, 40);
    let mut img = frozen.clone();
    let params = FillParams {
        gradient: GradientOptions {
            noise_level: 2,
            ..Default::default()
        },
        ..notch_params(15.0, 0.3)
    };

    let report = GradientFill::new(params).process(&mut img).expect("fill");
    let original = detect_region(&frozen, 255).expect("region");

    assert_eq!(report.mask_pixels, original.mask.len());
    assert_eq!(report.bbox, original.bbox);
    for y in 0..18 {
        for x in 0..24 {
            if !original.mask.contains(x, y) {
                assert_eq!(img.get(x, y), 40, "non-mask pixel ({x},{y}) changed");
            }
        }
    }
}

#[test]
fn noisy_runs_are_byte_identical() {
    let src = disc_u8(64, 48, (30, 24), 20, 255, 17);
    let params = FillParams {
        gradient: GradientOptions {
            noise_level: 3,
            ..Default::default()
        },
        ..Default::default()
    };
    let fill = GradientFill::new(params);

    let mut a = src.clone();
    let mut b = src.clone();
    fill.process(&mut a).expect("fill");
    fill.process(&mut b).expect("fill");
    assert_eq!(a, b);

    let mut plain = src.clone();
    GradientFill::default().process(&mut plain).expect("fill");
    assert_ne!(a, plain, "noise level 3 should perturb at least one pixel");
}

#[test]
fn noise_level_two_on_reference_disc() {
    let mut img = reference_disc();
    let params = FillParams {
        gradient: GradientOptions {
            noise_level: 2,
            ..Default::default()
        },
        ..Default::default()
    };
    let report = GradientFill::new(params).process(&mut img).expect("fill");
    assert_eq!(report.noise_level, 2);

    // 2x2 blocks, amplitude 12: ramp value plus hash offset, rounded half up
    assert_eq!(img.get(5, 5), 206);
    assert_eq!(img.get(3, 4), 185);
    assert_eq!(img.get(1, 5), 151);
    assert_eq!(img.get(0, 0), 0);
}

#[test]
fn domain_is_pulled_back_inside_far_edge() {
    // disc clipped by the right border: narrow but tall bounding box
    let mut img = disc_u8(20, 12, (19, 6), 5, 255, 0);
    let report = GradientFill::default().process(&mut img).expect("fill");
    assert_eq!(
        report.domain,
        GradientDomain {
            left: 9,
            top: 1,
            side: 11
        }
    );
    assert!(report.domain.left + report.domain.side <= 20);
    assert!(report.domain.top + report.domain.side <= 12);
}

#[test]
fn all_black_raster_fails_without_mutation() {
    let before = disc_u8(10, 10, (5, 5), 4, 0, 0);
    let mut img = before.clone();
    let err = GradientFill::default().process(&mut img).unwrap_err();
    assert_eq!(err, FillError::EmptyRegion { threshold: 255 });
    assert_eq!(img, before);
}

#[test]
fn lower_threshold_picks_up_gray_region() {
    let mut img = disc_u8(10, 10, (5, 5), 3, 230, 0);
    let params = FillParams {
        white_threshold: 220,
        ..Default::default()
    };
    let report = GradientFill::new(params).process(&mut img).expect("fill");
    assert_eq!(report.white_threshold, 220);
    assert_eq!(img.get(2, 5), 150);
    assert_eq!(img.get(8, 5), 255);
}
