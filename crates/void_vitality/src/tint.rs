//! Colour feedback for the hazard status

use serde::{Deserialize, Serialize};

/// Squared RGBA distance under which two colours compare equal
const COLOR_EPSILON_SQ: f32 = 1e-10;

/// Linear RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    /// Default poison tint
    pub const PURPLE: Color = Color::rgba(0.5, 0.0, 0.5, 1.0);

    /// Create an opaque colour
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a colour with alpha
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Interpolate towards `other`, with `t` clamped to `0..=1`
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Squared distance in RGBA space
    pub fn distance_sq(self, other: Color) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        let da = self.a - other.a;
        dr * dr + dg * dg + db * db + da * da
    }

    /// Distance in RGBA space
    pub fn distance(self, other: Color) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Approximate equality used to decide whether a fade is still running
    pub fn approx_eq(self, other: Color) -> bool {
        self.distance_sq(other) < COLOR_EPSILON_SQ
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

/// Per-frame colour fade between the base colour and the hazard colour.
///
/// Each step moves the current colour `rate * dt` of the way to the target.
/// The step is frame-rate dependent; existing colour tunings assume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TintBlend {
    /// Colour shown when healthy and outside hazards
    pub base: Color,
    /// Colour faded towards while inside a hazard
    pub hazard: Color,
    /// Fraction of the remaining distance covered per second
    pub rate: f32,
    current: Color,
}

impl TintBlend {
    pub fn new(base: Color, hazard: Color, rate: f32) -> Self {
        Self {
            base,
            hazard,
            rate,
            current: base,
        }
    }

    /// Colour currently displayed
    pub fn current(&self) -> Color {
        self.current
    }

    /// Advance the fade by one frame.
    ///
    /// Returns the new colour if a step was taken. Inside a hazard a step is
    /// always taken; outside, only while the colour differs from the base.
    pub fn step(&mut self, in_hazard: bool, delta_time: f32) -> Option<Color> {
        let target = if in_hazard {
            self.hazard
        } else if !self.current.approx_eq(self.base) {
            self.base
        } else {
            return None;
        };

        self.current = self.current.lerp(target, self.rate * delta_time);
        Some(self.current)
    }

    /// Jump straight back to the base colour
    pub fn reset(&mut self) -> Color {
        self.current = self.base;
        self.current
    }
}
