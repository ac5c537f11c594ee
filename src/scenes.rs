use crate::objects::sphere::Sphere;
use rand::Rng;

pub mod random_spheres;

pub trait Scene {
    /// Streams the scene's spheres in emission order, drawing from `rng` as it goes.
    fn spheres<'a, R: Rng + 'a>(&'a self, rng: &'a mut R) -> impl Iterator<Item = Sphere> + 'a;
}
