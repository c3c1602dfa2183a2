//! Fisher–Yates shuffling with an optional "never the identity" guarantee.
//!
//! Randomness is drawn through [`IndexPicker`] so sessions can run on a real
//! RNG while tests feed scripted index sequences.

use rand::Rng;

/// Upper bound on re-rolls when rejecting identity permutations.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Source of uniformly chosen indices.
pub trait IndexPicker {
    /// Pick an index in `0..=upper`.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexPicker for R {
    fn pick(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

/// Backward in-place Fisher–Yates: for `i` from the last index down to 1,
/// swap element `i` with an element at an index `<= i`.
pub fn shuffle_in_place<T, P>(items: &mut [T], picker: &mut P)
where
    P: IndexPicker + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = picker.pick(i).min(i);
        items.swap(i, j);
    }
}

/// A shuffled arrangement of `0..len`; `result[new_index] == original_index`.
#[must_use]
pub fn permutation<P>(len: usize, picker: &mut P) -> Vec<usize>
where
    P: IndexPicker + ?Sized,
{
    let mut order: Vec<usize> = (0..len).collect();
    shuffle_in_place(&mut order, picker);
    order
}

#[must_use]
pub fn is_identity(order: &[usize]) -> bool {
    order.iter().enumerate().all(|(new, &original)| new == original)
}

/// Like [`permutation`], but never returns the identity when `len > 1`.
///
/// Re-rolls up to [`MAX_SHUFFLE_ATTEMPTS`] times; a picker that keeps
/// producing the identity past the cap gets a one-step rotation instead.
#[must_use]
pub fn non_identity_permutation<P>(len: usize, picker: &mut P) -> Vec<usize>
where
    P: IndexPicker + ?Sized,
{
    let mut order = permutation(len, picker);
    if len < 2 {
        return order;
    }

    let mut attempts = 1;
    while is_identity(&order) && attempts < MAX_SHUFFLE_ATTEMPTS {
        order = permutation(len, picker);
        attempts += 1;
    }

    if is_identity(&order) {
        order.rotate_left(1);
    }
    order
}
