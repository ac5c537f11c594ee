use std::iter;

use na::Point3;
use rand::Rng;

use super::Scene;
use crate::materials::{dielectric::Dielectric, lambertian::Lambertian, metal::Metal, Material};
use crate::objects::sphere::Sphere;
use crate::types::color::{Color, ColorOps};
use crate::types::sampler::{IntervalSampler, Sampler};

pub const SMALL_RADIUS: f64 = 0.2;
/// How far into its unit cell a small sphere may be pushed along x and z.
pub const JITTER: f64 = 0.9;
/// Small spheres closer than this to `keep_clear()` are dropped.
pub const CLEARANCE: f64 = 0.9;

/// The point small spheres keep away from (next to the metal anchor).
pub fn keep_clear() -> Point3<f64> {
    Point3::new(4.0, SMALL_RADIUS, 0.0)
}

/// The "final scene" of the weekend book, at configurable grid size: a huge
/// ground sphere, a jittered grid of small random spheres, and three large
/// anchor spheres.
pub struct RandomSpheres {
    half_width: i32,
}

impl RandomSpheres {
    /// Ground plus anchors, emitted on every run.
    pub const FIXED_SPHERES: usize = 4;

    pub fn new(half_width: i32) -> Self {
        Self { half_width }
    }

    pub fn half_width(&self) -> i32 {
        self.half_width
    }

    /// Number of grid cells considered, i.e. the most small spheres a run can emit.
    pub fn candidates(&self) -> usize {
        let side = 2 * self.half_width.max(0) as usize;
        side * side
    }

    /// Grid cells in emission order, `a` outer and `b` inner, both in `[-W, W)`.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let w = self.half_width;
        (-w..w).flat_map(move |a| (-w..w).map(move |b| (a, b)))
    }

    pub fn ground() -> Sphere {
        Sphere::new(
            Point3::new(0.0, -1000.0, 0.0),
            1000.0,
            Lambertian::new(Color::gray(0.5)),
        )
    }

    pub fn anchors() -> [Sphere; 3] {
        [
            Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, Dielectric::glass()),
            Sphere::new(
                Point3::new(-4.0, 1.0, 0.0),
                1.0,
                Lambertian::new(Color::new(0.4, 0.2, 0.1)),
            ),
            Sphere::new(
                Point3::new(4.0, 1.0, 0.0),
                1.0,
                Metal::new(Color::new(0.7, 0.6, 0.5)),
            ),
        ]
    }

    /// Draws the small sphere for cell `(a, b)`, or `None` if it lands too close to
    /// `keep_clear()`. A skipped cell is not retried.
    pub fn sample_cell(rng: &mut impl Rng, a: i32, b: i32) -> Option<Sphere> {
        let unit = IntervalSampler::unit();

        let choose_mat = unit.sample(rng);
        let x = a as f64 + JITTER * unit.sample(rng);
        let z = b as f64 + JITTER * unit.sample(rng);
        let center = Point3::new(x, SMALL_RADIUS, z);

        if na::distance(&center, &keep_clear()) <= CLEARANCE {
            log::debug!("Skipping cell ({}, {}): center {:?} is too close", a, b, center);
            return None;
        }

        let material = Material::random(choose_mat, rng);
        Some(Sphere::new(center, SMALL_RADIUS, material))
    }
}

impl Default for RandomSpheres {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Scene for RandomSpheres {
    fn spheres<'a, R: Rng + 'a>(&'a self, rng: &'a mut R) -> impl Iterator<Item = Sphere> + 'a {
        iter::once(Self::ground())
            .chain(
                self.cells()
                    .filter_map(move |(a, b)| Self::sample_cell(&mut *rng, a, b)),
            )
            .chain(Self::anchors())
    }
}
