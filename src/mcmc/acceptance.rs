//! Metropolis acceptance criterion.

use rand::Rng;

/// Decides whether to move to a candidate whose cost differs from the
/// current one by `delta = candidate - current`.
///
/// - `delta < 0`: always accepted, no randomness consumed.
/// - `temperature > 0`: accepted with probability `exp(-delta / T)`,
///   using one uniform draw in `[0, 1)`.
/// - otherwise rejected, so `delta == 0` at `T == 0` is a rejection.
#[inline]
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        true
    } else if temperature > 0.0 {
        let probability = (-delta / temperature).exp();
        rng.random_range(0.0..1.0) < probability
    } else {
        false
    }
}
