use na::Vector3;
use rand::Rng;

pub trait Sampler<T> {
    fn sample(&self, rng: &mut impl Rng) -> T;
}

/// Uniform draws from the half-open interval `[min, max)`.
#[derive(Clone, Copy, Debug)]
pub struct IntervalSampler {
    min: f64,
    max: f64,
}

impl IntervalSampler {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl Sampler<f64> for IntervalSampler {
    fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(self.min..self.max)
    }
}

/// Uniform draws from the axis-aligned box `[min, max)^3`.
/// Components are drawn in x, y, z order.
#[derive(Clone, Copy, Debug)]
pub struct BoxSampler {
    interval: IntervalSampler,
}

impl BoxSampler {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            interval: IntervalSampler::new(min, max),
        }
    }

    pub fn unit() -> Self {
        Self {
            interval: IntervalSampler::unit(),
        }
    }
}

impl Sampler<Vector3<f64>> for BoxSampler {
    fn sample(&self, rng: &mut impl Rng) -> Vector3<f64> {
        let x = self.interval.sample(rng);
        let y = self.interval.sample(rng);
        let z = self.interval.sample(rng);

        Vector3::new(x, y, z)
    }
}
