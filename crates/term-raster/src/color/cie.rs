//! CIE XYZ, L\*a\*b\* and L\*u\*v\* color spaces
//!
//! Both perceptual spaces are relative to the D65 reference white, the
//! white point of sRGB. Lightness is on the conventional 0..=100 scale.
//!
//! # References
//!
//! CIE 15:2004, "Colorimetry", sections 8.2.1 (CIELAB) and 8.2.2 (CIELUV).

use super::linear_rgb::LinearRgb;

/// D65 reference white in XYZ (Y normalized to 1.0).
const WHITE_D65: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

/// (6/29)^3, the linear-segment cutoff of the CIE lightness function.
const EPSILON: f32 = 216.0 / 24389.0;

/// (29/3)^3, the slope of the linear segment.
const KAPPA: f32 = 24389.0 / 27.0;

/// A color in CIE 1931 XYZ space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<LinearRgb> for Xyz {
    /// Linear sRGB primaries to XYZ (IEC 61966-2-1 matrix, D65).
    fn from(rgb: LinearRgb) -> Self {
        Xyz {
            x: 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b,
            y: 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b,
            z: 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b,
        }
    }
}

impl Xyz {
    /// u'v' chromaticity coordinates. Black maps to (0, 0).
    #[inline]
    fn uv_prime(self) -> (f32, f32) {
        let denom = self.x + 15.0 * self.y + 3.0 * self.z;
        if denom <= f32::EPSILON {
            (0.0, 0.0)
        } else {
            (4.0 * self.x / denom, 9.0 * self.y / denom)
        }
    }
}

/// CIE lightness L* from relative luminance Y/Yn.
#[inline]
fn lightness(yr: f32) -> f32 {
    if yr > EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        KAPPA * yr
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// A color in CIE L\*a\*b\* space.
///
/// Euclidean distance here is the CIE76 color difference (Delta E).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Squared Euclidean distance (squared Delta E 1976).
    ///
    /// ```
    /// use term_raster::Lab;
    ///
    /// let white = Lab { l: 100.0, a: 0.0, b: 0.0 };
    /// let black = Lab { l: 0.0, a: 0.0, b: 0.0 };
    /// assert_eq!(white.distance_squared(black), 10000.0);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / WHITE_D65.x);
        let fy = lab_f(xyz.y / WHITE_D65.y);
        let fz = lab_f(xyz.z / WHITE_D65.z);
        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// A color in CIE L\*u\*v\* space.
///
/// Shares L* with Lab; the chromatic axes are scaled by lightness, which
/// keeps dark colors close together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    pub u: f32,
    pub v: f32,
}

impl Luv {
    /// Squared Euclidean distance (squared Delta E*uv).
    #[inline]
    pub fn distance_squared(self, other: Luv) -> f32 {
        let dl = self.l - other.l;
        let du = self.u - other.u;
        let dv = self.v - other.v;
        dl * dl + du * du + dv * dv
    }
}

impl From<Xyz> for Luv {
    fn from(xyz: Xyz) -> Self {
        let l = lightness(xyz.y / WHITE_D65.y);
        let (u_prime, v_prime) = xyz.uv_prime();
        let (un, vn) = WHITE_D65.uv_prime();
        Luv {
            l,
            u: 13.0 * l * (u_prime - un),
            v: 13.0 * l * (v_prime - vn),
        }
    }
}
