use crate::{Error, Result};
use rand::Rng;

/// Running sums of `weights` scaled by their total: non-decreasing, ending
/// at 1.  Fails on a zero (or negative) total.
pub fn cumulative(weights: &[f64]) -> Result<Vec<f64>> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(Error::ZeroWeightSum);
    }
    let mut cumsum = 0.0;
    Ok(weights
        .iter()
        .map(|w| {
            cumsum += w;
            cumsum / total
        })
        .collect())
}

/// Draw one entry of `population` with probability proportional to its
/// weight, by inverting the cumulative distribution: draw `x` uniform in
/// [0,1) and take the first index whose cumulative value exceeds `x`.
pub fn weighted_choice<'a, T, R: Rng>(
    population: &'a [T],
    weights: &[f64],
    rng: &mut R,
) -> Result<&'a T> {
    if population.len() != weights.len() {
        return Err(Error::LengthMismatch {
            population: population.len(),
            weights: weights.len(),
        });
    }
    let cdf = cumulative(weights)?;
    let x: f64 = rng.random();
    let idx = cdf.partition_point(|c| *c <= x);
    // rounding in the cumulative sums can leave x past the last entry
    let idx = idx.min(population.len() - 1);
    Ok(&population[idx])
}
