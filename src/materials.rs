pub mod dielectric;
pub mod lambertian;
pub mod metal;

use dielectric::Dielectric;
use lambertian::Lambertian;
use metal::Metal;
use rand::Rng;
use std::fmt;

/// Below this, a generated sphere is diffuse.
pub const LAMBERTIAN_THRESHOLD: f64 = 0.8;
/// Below this (and above the diffuse cut), a generated sphere is metal.
pub const METAL_THRESHOLD: f64 = 0.95;

/// Material tag as the renderer understands it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}

impl Material {
    /// Picks a category from `choose_mat` in `[0, 1)` and draws its parameters.
    pub fn random(choose_mat: f64, rng: &mut impl Rng) -> Self {
        if choose_mat < LAMBERTIAN_THRESHOLD {
            Material::Lambertian(Lambertian::random(rng))
        } else if choose_mat < METAL_THRESHOLD {
            Material::Metal(Metal::random(rng))
        } else {
            Material::Dielectric(Dielectric::glass())
        }
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}

impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Lambertian(m) => fmt::Display::fmt(m, f),
            Material::Metal(m) => fmt::Display::fmt(m, f),
            Material::Dielectric(m) => fmt::Display::fmt(m, f),
        }
    }
}
