//! Values stored inside of genetic layers. Anything a layer holds must [Interpolate], so that
//! two parents can be blended with a sampled weight.

use core::{error::Error, str::FromStr};
use serde::{Deserialize, Serialize};

pub trait Interpolate: Sized {
    /// Blend towards `other` by `weight`. A weight of 0 is `self`, 1 is `other`.
    /// Weights outside of [0, 1] extrapolate along the same line.
    fn interpolate(&self, other: &Self, weight: f64) -> Self;
}

impl Interpolate for f64 {
    #[inline]
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        self + (other - self) * weight
    }
}

/// A position in the palette atlas, in normalized coordinates.
/// Both coordinates are in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaletteSample {
    pub x: f64,
    pub y: f64,
}

impl PaletteSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sample the atlas at the pixel `(x, y)` of an atlas `size` pixels wide
    pub fn from_pixel(x: u16, y: u16, size: u16) -> Self {
        let span = f64::from(size.max(2) - 1);
        Self {
            x: f64::from(x) / span,
            y: f64::from(y) / span,
        }
    }

    /// The pixel nearest to this sample in an atlas `size` pixels wide
    pub fn pixel(&self, size: u16) -> (u16, u16) {
        let span = f64::from(size.max(1) - 1);
        let at = |v: f64| (v.clamp(0., 1.) * span).round() as u16;
        (at(self.x), at(self.y))
    }
}

impl Interpolate for PaletteSample {
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        Self {
            x: self.x.interpolate(&other.x, weight),
            y: self.y.interpolate(&other.y, weight),
        }
    }
}

/// An rgba color, every channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const RED: Self = Self::rgb(1., 0., 0.);
    pub const GREEN: Self = Self::rgb(0., 1., 0.);
    pub const BLUE: Self = Self::rgb(0., 0., 1.);
    pub const BLACK: Self = Self::rgb(0., 0., 0.);
    pub const WHITE: Self = Self::rgb(1., 1., 1.);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1. }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Scale every channel, alpha included
    pub fn multiply(self, n: f64) -> Self {
        Self {
            r: self.r * n,
            g: self.g * n,
            b: self.b * n,
            a: self.a * n,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Interpolate for Color {
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        Self {
            r: self.r.interpolate(&other.r, weight),
            g: self.g.interpolate(&other.g, weight),
            b: self.b.interpolate(&other.b, weight),
            a: self.a.interpolate(&other.a, weight),
        }
    }
}

/// Parses `#rrggbb` and `#rrggbbaa`. The functional `rgb()` / `rgba()` notations are not
/// supported
impl FromStr for Color {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("unsupported color notation {s:?}"))?;
        let int = u32::from_str_radix(hex, 16).map_err(|e| format!("bad hex color {s:?}: {e}"))?;
        let channel = |shift: u32| f64::from((int >> shift) & 0xff) / 255.;

        match hex.len() {
            6 => Ok(Self::rgb(channel(16), channel(8), channel(0))),
            8 => Ok(Self::rgba(channel(24), channel(16), channel(8), channel(0))),
            n => Err(format!("hex color {s:?} has {n} digits, wanted 6 or 8").into()),
        }
    }
}
