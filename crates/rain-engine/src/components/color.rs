use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channel-wise linear blend. `t` is clamped to [0, 1]; `t = 0` returns `self`
    /// and `t = 1` returns `other` exactly. Channels round to the nearest integer,
    /// halves away from zero, so a half-way blend of 255 and 30 yields 143.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: lerp_channel(self.a, other.a, t),
        }
    }

    /// Normalized channels for the draw buffer.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

#[inline]
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let v = a as f32 + (b as f32 - a as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// Maps accumulated wetness onto a dry→wet color ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WetnessPalette {
    pub dry: Color,
    pub wet: Color,
    /// Wetness at which the ramp saturates. Display only; the accumulator keeps growing.
    pub max_wetness: f32,
}

impl Default for WetnessPalette {
    fn default() -> Self {
        Self {
            dry: Color::rgb(255, 204, 153),
            wet: Color::rgb(30, 60, 200),
            max_wetness: 5000.0,
        }
    }
}

impl WetnessPalette {
    /// Blend factor in [0, 1].
    pub fn factor(&self, wetness: f32) -> f32 {
        if self.max_wetness <= 0.0 {
            return 1.0;
        }
        wetness.clamp(0.0, self.max_wetness) / self.max_wetness
    }

    pub fn color(&self, wetness: f32) -> Color {
        self.dry.lerp(self.wet, self.factor(wetness))
    }
}
