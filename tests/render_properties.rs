use knobicon::render::{geom, render};
use knobicon::Theme;

use std::f64::consts::PI;

#[test]
fn buffer_is_size_squared_rgba() {
    let theme = Theme::default();
    for size in [16u32, 33, 64] {
        let buf = render(size, &theme);
        assert_eq!(buf.width, size);
        assert_eq!(buf.height, size);
        assert_eq!(buf.data.len(), (size * size * 4) as usize);
    }
}

#[test]
fn corner_pixel_is_transparent_at_16() {
    let buf = render(16, &Theme::default());
    assert_eq!(buf.pixel(0, 0)[3], 0);
}

#[test]
fn alpha_mask_matches_plate() {
    let theme = Theme::default();
    let size = 64u32;
    let buf = render(size, &theme);
    let s = size as f64;
    let center = s / 2.0;
    let half = s * theme.plate_half_extent;
    let corner = s * theme.corner_radius;

    for y in 0..size {
        for x in 0..size {
            let alpha = buf.pixel(x, y)[3];
            let inside =
                geom::in_rounded_rect(x as f64, y as f64, center, center, half, half, corner);
            if !inside {
                assert_eq!(alpha, 0, "({x},{y}) outside the plate must be transparent");
            } else {
                let d = geom::edge_distance(x as f64, y as f64, center, half, corner);
                if d <= -1.0 {
                    assert_eq!(alpha, 255, "({x},{y}) deeper than the edge band must be opaque");
                }
            }
        }
    }
}

#[test]
fn tick_split_eight_accent_three_gray() {
    let theme = Theme::default();
    for size in [256u32, 512] {
        let buf = render(size, &theme);
        let s = size as f64;
        let knob_r = s * theme.knob_radius;
        let cx = s / 2.0;
        let cy = s / 2.0 + s * theme.knob_offset_y;
        let r = knob_r + s * (theme.tick_inner + theme.tick_outer) / 2.0;

        let angles = theme.tick_angles();
        let mut accent = 0;
        let mut gray = 0;
        for (i, &a) in angles.iter().enumerate() {
            // The first and last ticks sit on the inclusive dead-zone
            // boundary; sample a sliver to their live side so pixel rounding
            // cannot push the sample into the gap
            let a = if i + 1 == angles.len() { a - 0.008 } else { a + 0.008 };
            let x = (cx + a.cos() * r).round() as u32;
            let y = (cy + a.sin() * r).round() as u32;
            let [pr, pg, pb, _] = buf.pixel(x, y);
            if (pr, pg, pb) == theme.accent {
                accent += 1;
            } else if (pr, pg, pb) == theme.tick_gray {
                gray += 1;
            }
        }
        assert_eq!(accent, 8, "size {size}");
        assert_eq!(gray, 3, "size {size}");
    }
}

#[test]
fn dead_zone_has_no_tick_pixels() {
    let theme = Theme::default();
    let size = 256u32;
    let buf = render(size, &theme);
    let s = size as f64;
    let knob_r = s * theme.knob_radius;
    let cx = s / 2.0;
    let cy = s / 2.0 + s * theme.knob_offset_y;
    let annulus = (knob_r + s * theme.tick_inner, knob_r + s * theme.tick_outer);

    for y in 0..size {
        for x in 0..size {
            let d = geom::dist(x as f64, y as f64, cx, cy);
            if d < annulus.0 || d > annulus.1 {
                continue;
            }
            let norm = (y as f64 - cy).atan2(x as f64 - cx).rem_euclid(2.0 * PI);
            if norm > theme.dead_zone_start && norm < theme.dead_zone_end {
                let [pr, pg, pb, _] = buf.pixel(x, y);
                assert_ne!((pr, pg, pb), theme.accent, "tick pixel at ({x},{y}) in dead zone");
                assert_ne!((pr, pg, pb), theme.tick_gray, "tick pixel at ({x},{y}) in dead zone");
            }
        }
    }
}

#[test]
fn downsampled_double_size_matches_coarsely() {
    let theme = Theme::default();
    let small = render(64, &theme);
    let big = render(128, &theme);

    // 2x2 box-average the larger render down to 64 and compare the mean
    // per-channel difference. Geometry is scale-relative, so apart from
    // edge sampling the two should agree closely; no pixel equality.
    let mut total_diff = 0u64;
    let mut samples = 0u64;
    for y in 0..64u32 {
        for x in 0..64u32 {
            let mut acc = [0u32; 4];
            for dy in 0..2 {
                for dx in 0..2 {
                    let p = big.pixel(x * 2 + dx, y * 2 + dy);
                    for c in 0..4 {
                        acc[c] += p[c] as u32;
                    }
                }
            }
            let sp = small.pixel(x, y);
            for c in 0..4 {
                total_diff += ((acc[c] / 4) as i64 - sp[c] as i64).unsigned_abs();
                samples += 1;
            }
        }
    }
    let mean = total_diff as f64 / samples as f64;
    assert!(mean < 16.0, "mean channel difference {mean}");
}
