//! knobicon
//!
//! Procedural generator for the volume-knob application icon. Renders a
//! 1024x1024 master plus every size a macOS `AppIcon.appiconset` bundle
//! requires, writes them as PNG files, and emits the `Contents.json`
//! manifest.
//!
//! The crate has two real pieces: a per-pixel [`render`](render::render)
//! routine that evaluates a fixed sequence of geometric paint rules for each
//! pixel, and a minimal PNG encoder ([`png::encode`]) that frames the raw
//! RGBA buffer into a signature/IHDR/IDAT/IEND byte stream. Everything else
//! is plumbing: a manifest model, a subprocess resize delegate for the small
//! sizes, and a driver.
//!
//! # Example
//!
//! ```no_run
//! use knobicon::{generate_icon_set, resize::SipsResizer, Theme};
//! use std::path::Path;
//!
//! # fn main() -> knobicon::Result<()> {
//! let out = Path::new("AppIcon.appiconset");
//! let report = generate_icon_set(out, &Theme::default(), &SipsResizer)?;
//! println!("wrote {} files", report.written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod render;

pub mod png;

pub mod manifest;

pub mod resize;

pub mod generate;

// Re-export the driver entry points at the crate root for ergonomic use
pub use generate::{generate_icon_set, Report};

use std::f64::consts::PI;

/// Pixel size of the master render; also covers the 512pt @2x variant.
pub const MASTER_SIZE: u32 = 1024;

/// Filename the master render is written under.
pub const MASTER_FILENAME: &str = "icon_512x512@2x.png";

/// Smallest pixel size that is rendered directly rather than resampled from
/// the master. Below this, downsampling the master looks as good and is much
/// cheaper; at or above it, direct rendering avoids resampling artifacts.
pub const DIRECT_RENDER_MIN: u32 = 512;

/// One required output variant of the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// Nominal point size (the `16` in `16x16@2x`)
    pub base: u32,
    /// Density multiplier (1 or 2)
    pub scale: u32,
    /// Output filename inside the icon-set directory
    pub filename: &'static str,
}

impl SizeSpec {
    /// Actual pixel dimension of this variant.
    pub fn pixels(&self) -> u32 {
        self.base * self.scale
    }

    /// Manifest size string, e.g. `"16x16"`.
    pub fn size_string(&self) -> String {
        format!("{}x{}", self.base, self.base)
    }

    /// Manifest scale string, e.g. `"2x"`.
    pub fn scale_string(&self) -> String {
        format!("{}x", self.scale)
    }
}

/// The ten variants a macOS app icon set requires, in manifest order.
pub const ICON_SIZES: [SizeSpec; 10] = [
    SizeSpec { base: 16, scale: 1, filename: "icon_16x16.png" },
    SizeSpec { base: 16, scale: 2, filename: "icon_16x16@2x.png" },
    SizeSpec { base: 32, scale: 1, filename: "icon_32x32.png" },
    SizeSpec { base: 32, scale: 2, filename: "icon_32x32@2x.png" },
    SizeSpec { base: 128, scale: 1, filename: "icon_128x128.png" },
    SizeSpec { base: 128, scale: 2, filename: "icon_128x128@2x.png" },
    SizeSpec { base: 256, scale: 1, filename: "icon_256x256.png" },
    SizeSpec { base: 256, scale: 2, filename: "icon_256x256@2x.png" },
    SizeSpec { base: 512, scale: 1, filename: "icon_512x512.png" },
    SizeSpec { base: 512, scale: 2, filename: "icon_512x512@2x.png" },
];

/// An RGB color; alpha is handled separately by the edge mask.
pub type Rgb = (u8, u8, u8);

/// Every color and geometry constant of the icon, in one immutable record.
///
/// Lengths are fractions of the canvas size unless noted otherwise, so the
/// same theme renders consistently at any resolution. The defaults reproduce
/// the shipped icon exactly; the tick and dead-zone values are visual tuning
/// with no derivation behind them and should be treated as opaque.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background gradient, bottom tone
    pub bg_dark: Rgb,
    /// Background gradient, top tone
    pub bg_mid: Rgb,
    /// Indicator and active-tick color
    pub accent: Rgb,
    /// Glyph color
    pub accent_light: Rgb,
    /// Knob body gradient, rim tone
    pub knob_dark: Rgb,
    /// Knob body gradient and ring, center tone
    pub knob_light: Rgb,
    /// Inactive-tick color
    pub tick_gray: Rgb,

    /// Half-extent of the rounded-square plate
    pub plate_half_extent: f64,
    /// Corner radius of the plate
    pub corner_radius: f64,
    /// Vertical offset of the knob center below the canvas center
    pub knob_offset_y: f64,
    /// Knob body radius
    pub knob_radius: f64,
    /// Width of the ring band beyond the body radius
    pub ring_width: f64,
    /// Fraction of the body gradient applied at the rim (softens the falloff)
    pub knob_gradient_depth: f64,

    /// Indicator direction, radians from the positive x-axis
    pub indicator_angle: f64,
    /// Indicator half-width; converted per pixel to an angular threshold so
    /// the wedge has constant screen-space width
    pub indicator_width: f64,
    /// Radial extent of the indicator, as fractions of the body radius
    pub indicator_span: (f64, f64),

    /// Inner edge of the tick annulus, beyond the body radius
    pub tick_inner: f64,
    /// Outer edge of the tick annulus, beyond the body radius
    pub tick_outer: f64,
    /// Tick half-width (screen-space constant, like the indicator)
    pub tick_width: f64,
    /// Start of the bottom gap, radians, normalized to [0, 2pi)
    pub dead_zone_start: f64,
    /// End of the bottom gap
    pub dead_zone_end: f64,
    /// Total tick marks around the arc
    pub tick_count: u32,
    /// Ticks (in generation order) drawn in the accent color
    pub active_ticks: u32,

    /// Glyph em unit
    pub glyph_unit: f64,
    /// Distance from the knob rim to the glyph anchor
    pub glyph_rise: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_dark: (28, 28, 30),
            bg_mid: (44, 44, 46),
            accent: (220, 60, 60),
            accent_light: (255, 100, 80),
            knob_dark: (58, 58, 62),
            knob_light: (90, 90, 96),
            tick_gray: (160, 160, 166),

            plate_half_extent: 0.44,
            corner_radius: 0.185,
            knob_offset_y: 0.02,
            knob_radius: 0.25,
            ring_width: 0.025,
            knob_gradient_depth: 0.7,

            indicator_angle: -PI * 0.33,
            indicator_width: 0.025,
            indicator_span: (0.3, 0.9),

            tick_inner: 0.06,
            tick_outer: 0.10,
            tick_width: 0.008,
            dead_zone_start: PI * 0.38,
            dead_zone_end: PI * 0.62,
            tick_count: 11,
            active_ticks: 8,

            glyph_unit: 0.045,
            glyph_rise: 0.12,
        }
    }
}

impl Theme {
    /// The angles (radians, normalized to [0, 2pi)) the tick marks sit at,
    /// in generation order: evenly spaced from the dead-zone end, wrapping
    /// around through 2pi back to the dead-zone start.
    pub fn tick_angles(&self) -> Vec<f64> {
        let tau = 2.0 * PI;
        let arc_range = tau - (self.dead_zone_end - self.dead_zone_start);
        (0..self.tick_count)
            .map(|i| {
                let t = i as f64 / (self.tick_count - 1) as f64;
                (self.dead_zone_end + arc_range * t).rem_euclid(tau)
            })
            .collect()
    }
}
