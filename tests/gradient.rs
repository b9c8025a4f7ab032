mod common;

use common::synthetic_buffer::uniform_rgba;
use pixel_probe::gradient::{max_gradient, min_gradient, RingParams};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn uniform_buffer_breaks_ties_toward_the_first_angle() {
    let buf = uniform_rgba(3, 3, 0x808080);
    let params = RingParams {
        radius: 1.0,
        samples: 4,
    };

    let min = min_gradient(&buf, 1, 1, None, &params).expect("all four samples are in bounds");
    assert_eq!(min.divergence, 0);
    assert!(
        approx_eq(min.direction.x, 1.0) && approx_eq(min.direction.y, 0.0),
        "tie must keep the first sampled angle, got ({}, {})",
        min.direction.x,
        min.direction.y
    );

    let max = max_gradient(&buf, 1, 1, None, &params).unwrap();
    assert_eq!(max.divergence, 0);
    assert!(approx_eq(max.direction.x, 1.0) && approx_eq(max.direction.y, 0.0));
}

#[test]
fn max_gradient_points_at_the_distinct_neighbor() {
    let mut buf = uniform_rgba(9, 9, 0x808080);
    buf.set_color(6, 4, 0xFFFFFF);

    let params = RingParams {
        radius: 2.0,
        samples: 8,
    };
    let hit = max_gradient(&buf, 4, 4, None, &params).unwrap();
    assert_eq!(hit.divergence, 3 * 0x7F);
    assert!(
        approx_eq(hit.direction.x, 1.0) && approx_eq(hit.direction.y, 0.0),
        "expected an eastward direction, got ({}, {})",
        hit.direction.x,
        hit.direction.y
    );
}

#[test]
fn min_gradient_finds_the_matching_neighbor() {
    let mut buf = uniform_rgba(9, 9, 0xFFFFFF);
    buf.set_color(4, 4, 0x808080);
    buf.set_color(4, 2, 0x808080); // two pixels north of center

    let params = RingParams {
        radius: 2.0,
        samples: 4,
    };
    let hit = min_gradient(&buf, 4, 4, None, &params).unwrap();
    assert_eq!(hit.divergence, 0);
    assert!(
        approx_eq(hit.direction.x, 0.0) && approx_eq(hit.direction.y, -1.0),
        "expected a northward direction, got ({}, {})",
        hit.direction.x,
        hit.direction.y
    );
}

#[test]
fn explicit_reference_color_replaces_the_center_pixel() {
    let buf = uniform_rgba(5, 5, 0xFFFFFF);
    let params = RingParams {
        radius: 1.0,
        samples: 4,
    };

    // Against black, every white sample diverges maximally.
    let hit = max_gradient(&buf, 2, 2, Some(0x000000), &params).unwrap();
    assert_eq!(hit.divergence, 3 * 255);

    // Against the buffer's own color, nothing diverges.
    let hit = max_gradient(&buf, 2, 2, Some(0xFFFFFF), &params).unwrap();
    assert_eq!(hit.divergence, 0);
}

#[test]
fn fully_out_of_bounds_ring_yields_no_direction() {
    let buf = uniform_rgba(3, 3, 0x112233);
    let params = RingParams {
        radius: 5.0,
        samples: 12,
    };

    assert!(min_gradient(&buf, 0, 0, None, &params).is_none());
    assert!(max_gradient(&buf, 0, 0, None, &params).is_none());
}

#[test]
fn default_params_probe_a_wide_ring() {
    let mut buf = uniform_rgba(16, 16, 0x202020);
    buf.set_color(12, 8, 0xF0F0F0); // four pixels east, the default radius

    let hit = max_gradient(&buf, 8, 8, None, &RingParams::default()).unwrap();
    assert_eq!(hit.divergence, 3 * 0xD0);
    assert!(approx_eq(hit.direction.x, 1.0) && approx_eq(hit.direction.y, 0.0));
}
