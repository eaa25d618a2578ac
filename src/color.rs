//! Pixel color formatting.
//!
//! Writes accumulated sample colors as plain-text `R G B` lines, the pixel
//! body of an ASCII PPM image.

use std::io::{self, Write};

use crate::interval::Interval;
use crate::vec3::Color;

/// Channel range kept before scaling to bytes.
const INTENSITY: Interval = Interval::new(0.0, 0.9999);

/// Map a linear channel value to an integer in [0, 255].
///
/// Gamma is approximated by a square root. NaN maps to 0.
pub fn to_byte(linear: f64) -> u8 {
    (255.999 * INTENSITY.clamp(linear.sqrt())) as u8
}

/// Write the average of `samples_per_pixel` accumulated samples as one
/// `"R G B\n"` line.
pub fn write_color<W: Write>(
    out: &mut W,
    pixel_color: Color,
    samples_per_pixel: u32,
) -> io::Result<()> {
    let scale = 1.0 / samples_per_pixel as f64;
    let r = to_byte(pixel_color.r() * scale);
    let g = to_byte(pixel_color.g() * scale);
    let b = to_byte(pixel_color.b() * scale);
    writeln!(out, "{} {} {}", r, g, b)
}
