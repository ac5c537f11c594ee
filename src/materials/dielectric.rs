use crate::types::vector::Scalar;
use std::fmt;

pub const GLASS_INDEX: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dielectric {
    ref_idx: f64,
}

impl Dielectric {
    pub fn new(ref_idx: f64) -> Self {
        Self { ref_idx }
    }

    pub fn glass() -> Self {
        Self::new(GLASS_INDEX)
    }

    #[cfg(test)]
    pub fn ref_idx(&self) -> f64 {
        self.ref_idx
    }
}

impl fmt::Display for Dielectric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dielectric({})", Scalar(self.ref_idx))
    }
}
