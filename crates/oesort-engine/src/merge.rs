//! Two-pointer merge kernels for neighbor exchange.
//!
//! After a bulk exchange both nodes hold both sorted runs. Each keeps
//! exactly its own partition length out of the union: the logically-lower
//! node the low half, the logically-upper node the high half. Ties prefer
//! the node's own element so equal keys do not migrate needlessly.

/// Keep the lowest `local.len()` elements of the union of `local` and
/// `other`.
///
/// Both inputs must be sorted ascending and `scratch` must hold at least
/// `local.len()` elements. `local` ends up sorted ascending.
pub fn merge_keep_low(local: &mut [f32], other: &[f32], scratch: &mut [f32]) {
    let n = local.len();
    let m = other.len();
    let mut i = 0;
    let mut j = 0;
    for slot in scratch[..n].iter_mut() {
        if j >= m || (i < n && local[i] <= other[j]) {
            *slot = local[i];
            i += 1;
        } else {
            *slot = other[j];
            j += 1;
        }
    }
    local.copy_from_slice(&scratch[..n]);
}

/// Keep the highest `local.len()` elements of the union of `local` and
/// `other`, reporting whether any element of `local` actually changed.
///
/// Scans both runs backward, then writes the kept elements in ascending
/// order, comparing each against the previous contents.
pub fn merge_keep_high(local: &mut [f32], other: &[f32], scratch: &mut [f32]) -> bool {
    let n = local.len();
    let m = other.len();
    let mut i = n;
    let mut j = m;
    // scratch holds the top of the union, largest first.
    for slot in scratch[..n].iter_mut() {
        if j == 0 || (i > 0 && local[i - 1] >= other[j - 1]) {
            i -= 1;
            *slot = local[i];
        } else {
            j -= 1;
            *slot = other[j];
        }
    }
    let mut changed = false;
    for (t, slot) in local.iter_mut().enumerate() {
        let v = scratch[n - 1 - t];
        if *slot != v {
            *slot = v;
            changed = true;
        }
    }
    changed
}
