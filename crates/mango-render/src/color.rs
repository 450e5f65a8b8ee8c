//! Hex colours and piecewise-linear colour scales.

use std::fmt;
use std::str::FromStr;

use mango_core::{MangoError, Result, Validate};
use serde::{Deserialize, Serialize};

/// An 8-bit sRGB colour, serialized as `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend towards `other` by `t` in `[0, 1]`, rounding each channel.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl FromStr for Rgb {
    type Err = MangoError;

    /// Parse `"#RRGGBB"` or the short form `"#RGB"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MangoError::InvalidColorScale(format!("invalid hex colour {:?}", s));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => Ok(Rgb::new(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = MangoError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> String {
        c.to_string()
    }
}

/// One `(position, colour)` pair of a [`ColorScale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(position: f64, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// Ordered colour stops spanning `[0, 1]`, interpolated linearly between stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl ColorScale {
    /// Build a scale and check its stops.
    pub fn new(stops: Vec<ColorStop>) -> Result<Self> {
        let scale = Self { stops };
        scale.validate()?;
        Ok(scale)
    }

    /// Dark green at the bottom through yellow-green, gold and orange to a
    /// red-orange top.
    pub fn mango() -> Self {
        Self {
            stops: vec![
                ColorStop::new(0.0, Rgb::new(0x00, 0x64, 0x00)),
                ColorStop::new(0.3, Rgb::new(0x9A, 0xCD, 0x32)),
                ColorStop::new(0.6, Rgb::new(0xFF, 0xD7, 0x00)),
                ColorStop::new(0.8, Rgb::new(0xFF, 0xA5, 0x00)),
                ColorStop::new(1.0, Rgb::new(0xFF, 0x63, 0x47)),
            ],
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Colour at `t`, clamped to `[0, 1]`.
    ///
    /// At a position shared by two stops the first of them is used.
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let Some(first) = self.stops.first() else {
            return Rgb::new(0, 0, 0);
        };
        if t <= first.position {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.position {
                let span = hi.position - lo.position;
                let f = if span > 0.0 { (t - lo.position) / span } else { 1.0 };
                return lo.color.lerp(hi.color, f);
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    /// `[[position, "#RRGGBB"], ...]`, the form Plotly accepts for `colorscale`.
    pub fn to_plotly(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.stops
                .iter()
                .map(|s| serde_json::json!([s.position, s.color.to_string()]))
                .collect(),
        )
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::mango()
    }
}

impl Validate for ColorScale {
    fn validate(&self) -> Result<()> {
        if self.stops.len() < 2 {
            return Err(MangoError::InvalidColorScale(format!(
                "need at least 2 stops, got {}",
                self.stops.len()
            )));
        }
        for stop in &self.stops {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(MangoError::InvalidColorScale(format!(
                    "stop position {} outside [0, 1]",
                    stop.position
                )));
            }
        }
        for pair in self.stops.windows(2) {
            if pair[1].position < pair[0].position {
                return Err(MangoError::InvalidColorScale(format!(
                    "stop positions decrease from {} to {}",
                    pair[0].position, pair[1].position
                )));
            }
        }
        let first = self.stops[0].position;
        let last = self.stops[self.stops.len() - 1].position;
        if first != 0.0 || last != 1.0 {
            return Err(MangoError::InvalidColorScale(format!(
                "stops must start at 0 and end at 1, got {} and {}",
                first, last
            )));
        }
        Ok(())
    }
}
