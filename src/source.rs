use crate::Error;
use arbitrary::Unstructured;
use rand::rngs::{SmallRng, StdRng, ThreadRng};
use rand::Rng;

/// Source of the random decisions made during generation.
///
/// Implemented for the `rand` generators and for [`Unstructured`], so the same pattern can be
/// driven by a seeded RNG or by fuzzer input.
pub trait Entropy {
    /// Returns an integer drawn uniformly from `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: u64) -> Result<u64, Error>;

    /// Returns `true` with probability `p`, `0.0 <= p <= 1.0`.
    fn chance(&mut self, p: f64) -> Result<bool, Error>;
}

impl<E: Entropy + ?Sized> Entropy for &mut E {
    fn below(&mut self, n: u64) -> Result<u64, Error> {
        (**self).below(n)
    }
    fn chance(&mut self, p: f64) -> Result<bool, Error> {
        (**self).chance(p)
    }
}

macro_rules! impl_entropy_for_rng {
    ($($rng:ty),* $(,)*) => (
        $(
            impl Entropy for $rng {
                fn below(&mut self, n: u64) -> Result<u64, Error> {
                    Ok(self.random_range(0..n))
                }
                fn chance(&mut self, p: f64) -> Result<bool, Error> {
                    Ok(self.random_bool(p))
                }
            }
        )*
    )
}

impl_entropy_for_rng!(StdRng, SmallRng, ThreadRng);

/// Draws from the fuzzer's bytes. Once the data is exhausted every draw returns
/// the lowest value, i.e. `below` returns 0 and `chance` returns `true` for any `p > 0`.
impl Entropy for Unstructured<'_> {
    fn below(&mut self, n: u64) -> Result<u64, Error> {
        Ok(self.int_in_range(0..=n - 1)?)
    }
    fn chance(&mut self, p: f64) -> Result<bool, Error> {
        let x = self.int_in_range(0..=u32::MAX)?;
        Ok((x as f64) < p * (u32::MAX as f64 + 1.0))
    }
}
