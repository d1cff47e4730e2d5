use rand::Rng;
use rand::seq::SliceRandom;

/// Produces a random permutation of `0..len`.
///
/// Uses a Fisher–Yates shuffle, so every ordering is equally likely for an
/// unbiased `rng`. Pure apart from consuming randomness; `len == 0` yields an
/// empty order.
#[must_use]
pub fn shuffled_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}
