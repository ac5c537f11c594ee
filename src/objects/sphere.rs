use crate::materials::Material;
use crate::types::vector::{Float3, Scalar};
use na::Point3;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3<f64>,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Point3<f64>, radius: f64, material: impl Into<Material>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }

    #[cfg(test)]
    pub fn distance_to(&self, p: &Point3<f64>) -> f64 {
        na::distance(&self.center, p)
    }
}

// One initializer entry, without indentation or trailing comma
impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ {}, {}, {} }}",
            Float3::from(&self.center),
            Scalar(self.radius),
            self.material
        )
    }
}
