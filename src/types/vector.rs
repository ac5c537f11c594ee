use na::{Point3, Vector3};
use std::fmt;

/// A scalar written as a float literal.
///
/// Uses the shortest text that parses back to the same `f64`. Integral values keep
/// a trailing `.0` and extreme magnitudes switch to exponent form (`1.2e-5`), both
/// of which are valid C float literals.
#[derive(Clone, Copy, Debug)]
pub struct Scalar(pub f64);

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// A 3-component vector written as a `float3(x, y, z)` constructor call.
#[derive(Clone, Copy, Debug)]
pub struct Float3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Float3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<&Vector3<f64>> for Float3 {
    fn from(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<&Point3<f64>> for Float3 {
    fn from(p: &Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl fmt::Display for Float3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "float3({}, {}, {})",
            Scalar(self.x),
            Scalar(self.y),
            Scalar(self.z)
        )
    }
}
