use crate::types::color::Color;
use crate::types::sampler::{BoxSampler, Sampler};
use crate::types::vector::Float3;
use rand::Rng;
use std::fmt;

pub const MIN_ALBEDO: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metal {
    albedo: Color,
}

impl Metal {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(BoxSampler::new(MIN_ALBEDO, 1.0).sample(rng))
    }

    #[cfg(test)]
    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Metal({})", Float3::from(&self.albedo))
    }
}
