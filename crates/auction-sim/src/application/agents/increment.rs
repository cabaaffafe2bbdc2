//! Bid increment sources
//!
//! Buyers raise over the ask by an amount drawn from an [`IncrementSource`].
//! The default is uniform over a small integer range; tests inject fixed or
//! scripted values to make runs reproducible.

use crate::domain::Price;
use crate::infrastructure::config::IncrementConfig;
use rand::prelude::*;
use rust_decimal::Decimal;

/// Supplies the amount a buyer adds to the ask when it raises
pub trait IncrementSource {
    fn next_increment(&mut self) -> Price;
}

impl<F> IncrementSource for F
where
    F: FnMut() -> Price,
{
    fn next_increment(&mut self) -> Price {
        self()
    }
}

/// Uniform integer increments in `[min, max]`
pub struct UniformIncrement {
    rng: StdRng,
    min: u32,
    max: u32,
}

impl UniformIncrement {
    pub fn new(config: IncrementConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            min: config.min,
            max: config.max.max(config.min),
        }
    }
}

impl IncrementSource for UniformIncrement {
    fn next_increment(&mut self) -> Price {
        Decimal::from(self.rng.gen_range(self.min..=self.max))
    }
}

/// Always the same increment
#[derive(Debug, Clone, Copy)]
pub struct FixedIncrement(pub Price);

impl IncrementSource for FixedIncrement {
    fn next_increment(&mut self) -> Price {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut source = UniformIncrement::new(IncrementConfig { min: 1, max: 10 }, Some(42));
        for _ in 0..500 {
            let inc = source.next_increment();
            assert!(inc >= dec!(1) && inc <= dec!(10), "out of range: {}", inc);
            assert_eq!(inc.fract(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_uniform_deterministic_with_seed() {
        let config = IncrementConfig::default();
        let mut a = UniformIncrement::new(config, Some(12345));
        let mut b = UniformIncrement::new(config, Some(12345));
        for _ in 0..50 {
            assert_eq!(a.next_increment(), b.next_increment());
        }
    }

    #[test]
    fn test_closure_source() {
        let mut values = vec![dec!(3), dec!(7)].into_iter();
        let mut source = move || values.next().unwrap_or(Decimal::ONE);
        assert_eq!(source.next_increment(), dec!(3));
        assert_eq!(source.next_increment(), dec!(7));
        assert_eq!(source.next_increment(), dec!(1));
    }

    #[test]
    fn test_fixed_source() {
        let mut source = FixedIncrement(dec!(10));
        assert_eq!(source.next_increment(), dec!(10));
        assert_eq!(source.next_increment(), dec!(10));
    }
}
