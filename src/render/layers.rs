//! The ordered paint rules that build up the icon.
//!
//! Each rule is a pure function of the pixel position and the resolved
//! per-size geometry: it either claims the pixel with a color or declines.
//! [`render`](super::render) applies them in a fixed order and lets later
//! rules overwrite earlier ones, so compositing is plain painter's algorithm;
//! the only blending is the interpolation a rule does internally.

use std::f64::consts::PI;

use crate::render::geom;
use crate::{Rgb, Theme};

/// Linear interpolation between two color channels, truncated like the
/// integer conversion the gradients are defined in terms of.
fn lerp_channel(a: u8, b: u8, t: f64) -> i32 {
    (a as f64 + (b as f64 - a as f64) * t) as i32
}

/// Interpolate two colors and clamp each channel to the byte range.
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    (
        lerp_channel(a.0, b.0, t).clamp(0, 255) as u8,
        lerp_channel(a.1, b.1, t).clamp(0, 255) as u8,
        lerp_channel(a.2, b.2, t).clamp(0, 255) as u8,
    )
}

/// Theme geometry resolved to pixel units for one canvas size.
pub struct Frame<'a> {
    pub theme: &'a Theme,
    pub size: f64,
    pub center: f64,
    pub plate_half: f64,
    pub corner_r: f64,
    pub knob_cx: f64,
    pub knob_cy: f64,
    pub knob_r: f64,
    pub ring_outer: f64,
    pub indicator_halfwidth: f64,
    pub tick_inner: f64,
    pub tick_outer: f64,
    pub tick_halfwidth: f64,
    pub tick_angles: Vec<f64>,
    pub glyph_cx: f64,
    pub glyph_cy: f64,
    pub glyph_unit: f64,
}

impl<'a> Frame<'a> {
    pub fn new(size: u32, theme: &'a Theme) -> Self {
        let s = size as f64;
        let center = s / 2.0;
        let knob_r = s * theme.knob_radius;
        let knob_cy = center + s * theme.knob_offset_y;
        Self {
            theme,
            size: s,
            center,
            plate_half: s * theme.plate_half_extent,
            corner_r: s * theme.corner_radius,
            knob_cx: center,
            knob_cy,
            knob_r,
            ring_outer: knob_r + s * theme.ring_width,
            indicator_halfwidth: s * theme.indicator_width,
            tick_inner: knob_r + s * theme.tick_inner,
            tick_outer: knob_r + s * theme.tick_outer,
            tick_halfwidth: s * theme.tick_width,
            tick_angles: theme.tick_angles(),
            glyph_cx: center,
            glyph_cy: center - knob_r - s * theme.glyph_rise,
            glyph_unit: s * theme.glyph_unit,
        }
    }
}

/// Rule 1: vertical background gradient across the plate.
pub fn background(f: &Frame, y: f64) -> Rgb {
    lerp_rgb(f.theme.bg_mid, f.theme.bg_dark, y / f.size)
}

/// Rules 2 and 3: the knob ring band and the knob body with its indicator
/// wedge. Ring pixels fade from the light tone into the background; body
/// pixels darken radially, and the indicator claims the wedge around the
/// pointer angle within its radial span.
pub fn knob(f: &Frame, x: f64, y: f64) -> Option<Rgb> {
    let d = geom::dist(x, y, f.knob_cx, f.knob_cy);
    let theme = f.theme;

    if d <= f.ring_outer && d > f.knob_r {
        let ring_t = (d - f.knob_r) / (f.ring_outer - f.knob_r);
        return Some(lerp_rgb(theme.knob_light, theme.bg_dark, ring_t));
    }

    if d <= f.knob_r {
        let knob_t = d / f.knob_r;
        let mut color = lerp_rgb(
            theme.knob_light,
            theme.knob_dark,
            knob_t * theme.knob_gradient_depth,
        );

        let angle = (y - f.knob_cy).atan2(x - f.knob_cx);
        let diff = geom::angular_distance(angle, theme.indicator_angle);
        // Constant screen-space width: the angular threshold narrows with
        // radius. At the exact center every angle qualifies.
        let threshold = if d > 0.0 {
            f.indicator_halfwidth.atan2(d)
        } else {
            PI
        };
        let (span_lo, span_hi) = theme.indicator_span;
        if diff < threshold && d > f.knob_r * span_lo && d < f.knob_r * span_hi {
            color = theme.accent;
        }
        return Some(color);
    }

    None
}

/// Rule 4: the tick arc. Pixels in the annulus outside the dead zone are
/// painted when close enough (shortest arc) to one of the tick angles;
/// the active ticks render in the accent color, the rest in gray.
pub fn ticks(f: &Frame, x: f64, y: f64) -> Option<Rgb> {
    let d = geom::dist(x, y, f.knob_cx, f.knob_cy);
    if d < f.tick_inner || d > f.tick_outer {
        return None;
    }

    let theme = f.theme;
    let norm_angle = (y - f.knob_cy).atan2(x - f.knob_cx).rem_euclid(2.0 * PI);
    if norm_angle >= theme.dead_zone_start && norm_angle <= theme.dead_zone_end {
        return None;
    }

    let width = if d > 0.0 { f.tick_halfwidth.atan2(d) } else { 0.0 };
    for (i, &tick_angle) in f.tick_angles.iter().enumerate() {
        if geom::angular_distance(norm_angle, tick_angle) < width {
            return Some(if (i as u32) < theme.active_ticks {
                theme.accent
            } else {
                theme.tick_gray
            });
        }
    }

    None
}

/// Rule 5: the letter glyph above the knob, built from three axis-aligned
/// bar tests (vertical stroke, top bar, middle bar) inside its bounding box.
pub fn glyph(f: &Frame, x: f64, y: f64) -> Option<Rgb> {
    let u = f.glyph_unit;
    let dx = (x - f.glyph_cx).abs();
    let dy = y - (f.glyph_cy - u);
    if dx >= u * 0.8 || !(0.0..=u * 2.0).contains(&dy) {
        return None;
    }
    if dx < u * 0.2 {
        return Some(f.theme.accent_light);
    }
    if dy < u * 0.3 {
        return Some(f.theme.accent_light);
    }
    if u * 0.85 < dy && dy < u * 1.15 && dx < u * 0.55 {
        return Some(f.theme.accent_light);
    }
    None
}
