pub type Color = na::Vector3<f64>;

pub trait ColorOps {
    fn gray(value: f64) -> Self;
    #[cfg(test)]
    fn in_range(&self, min: f64, max: f64) -> bool;
}

impl ColorOps for Color {
    fn gray(value: f64) -> Self {
        Color::new(value, value, value)
    }

    // Inclusive on both ends
    #[cfg(test)]
    fn in_range(&self, min: f64, max: f64) -> bool {
        self.iter().all(|c| (min..=max).contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_fills_every_channel() {
        assert_eq!(Color::gray(0.5), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn in_range_is_inclusive() {
        assert!(Color::new(0.5, 1.0, 0.75).in_range(0.5, 1.0));
        assert!(!Color::new(0.49, 1.0, 0.75).in_range(0.5, 1.0));
    }
}
