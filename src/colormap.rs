//! The "hot" black-red-yellow-white colormap, sampled into the 256-entry
//! `uint32_t` table the LED indicator code compiles in.
//!
//! Segment points are matplotlib's `_hot_data`, bundled here so the emitted
//! bytes match `cm.hot(i / 255, 1, True)` exactly.

use serde::Serialize;

const RED_FLOOR: f64 = 0.0416;
const RED_SATURATION: f64 = 0.365079;
const GREEN_SATURATION: f64 = 0.746032;

/// Number of entries in the generated table.
pub const TABLE_LEN: usize = 256;

/// A byte-valued color, serialized as `{"r": .., "g": .., "b": ..}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Six lowercase hex digits, `rrggbb`.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// matplotlib's bytes=True cast truncates rather than rounds.
fn to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// Sample the hot ramp at a normalized position in `[0, 1]`.
///
/// Red rises first and saturates, then green, then blue, so the ramp runs
/// black to red to yellow to white. `hot(0.0)` is `(10, 0, 0)` and
/// `hot(1.0)` is `(255, 255, 255)`.
pub fn hot(x: f64) -> Rgb {
    let x = x.clamp(0.0, 1.0);

    let r = if x < RED_SATURATION {
        RED_FLOOR + (1.0 - RED_FLOOR) * x / RED_SATURATION
    } else {
        1.0
    };

    let g = if x < RED_SATURATION {
        0.0
    } else if x < GREEN_SATURATION {
        (x - RED_SATURATION) / (GREEN_SATURATION - RED_SATURATION)
    } else {
        1.0
    };

    let b = if x < GREEN_SATURATION {
        0.0
    } else {
        (x - GREEN_SATURATION) / (1.0 - GREEN_SATURATION)
    };

    Rgb { r: to_byte(r), g: to_byte(g), b: to_byte(b) }
}

/// The full table, entry `i` sampled at `i / 255`.
pub fn table() -> Vec<Rgb> {
    (0..TABLE_LEN).map(|i| hot(i as f64 / 255.0)).collect()
}

/// Render the table as the C array literal pasted into the firmware.
///
/// Every entry gets a trailing comma except the last.
pub fn render_c(entries: &[Rgb]) -> String {
    let mut out = String::from("static uint32_t colormap[] = {\n");
    for (i, c) in entries.iter().enumerate() {
        out.push_str("  0x");
        out.push_str(&c.hex());
        if i + 1 < entries.len() {
            out.push_str(",\n");
        }
    }
    out.push_str("\n};\n");
    out
}
