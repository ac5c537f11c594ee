use crate::types::color::Color;
use crate::types::sampler::{BoxSampler, Sampler};
use crate::types::vector::Float3;
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    // Product of two uniform colors, so darker tones are more likely
    pub fn random(rng: &mut impl Rng) -> Self {
        let sampler = BoxSampler::unit();
        let a = sampler.sample(rng);
        let b = sampler.sample(rng);

        Self::new(a.component_mul(&b))
    }

    #[cfg(test)]
    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl fmt::Display for Lambertian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lambertian({})", Float3::from(&self.albedo))
    }
}
