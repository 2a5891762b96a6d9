//! Comembership of observations.
//!
//! For a clusterization of n observations, the comembership vector flags for each pair (i,j) with i < j
//! whether observations i and j share a label. Pairs are enumerated row by row of the upper triangle :
//! (0,1), (0,2) ... (0,n-1), (1,2) ... (n-2,n-1), so the vector has length n(n-1)/2 whatever the number of clusters,
//! and vectors computed for the same n can be compared entry by entry.
//!
//! Time and memory are O(n²), the output is pre-allocated before the pass.

use rayon::prelude::*;

/// number of pairs (i,j) with i < j < n, i.e n(n-1)/2 (0 for n <= 1)
pub fn nb_pairs(n: usize) -> usize {
    if n <= 1 { 0 } else { n * (n - 1) / 2 }
}

/// position of pair (i,j) in a comembership vector of n observations. Requires i < j < n
#[inline]
pub fn pair_index(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(i < j && j < n);
    row_offset(i, n) + (j - i - 1)
}

// offset of first pair (i, i+1) of row i
#[inline]
fn row_offset(i: usize, n: usize) -> usize {
    i * n - i * (i + 1) / 2
}

/// returns for each pair (i,j), i < j, 1 if labels\[i\] == labels\[j\] and 0 otherwise.
/// Labels are compared with exact equality. Empty for less than 2 observations.
pub fn comembership<L: PartialEq>(labels: &[L]) -> Vec<u8> {
    let n = labels.len();
    let mut comembership = vec![0u8; nb_pairs(n)];
    //
    let mut idx_comembership = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if labels[i] == labels[j] {
                comembership[idx_comembership] = 1;
            }
            idx_comembership += 1;
        }
    }
    log::trace!("comembership n : {}, nb pairs : {}", n, idx_comembership);
    //
    comembership
} // end of comembership

/// parallel version of [comembership], rows of the upper triangle are dispatched to rayon threads.
pub fn par_comembership<L: PartialEq + Sync>(labels: &[L]) -> Vec<u8> {
    let n = labels.len();
    let mut comembership = vec![0u8; nb_pairs(n)];
    // cut output into disjoint row slices, row i has n-i-1 pairs
    let mut rows = Vec::<(usize, &mut [u8])>::with_capacity(n);
    let mut rest = comembership.as_mut_slice();
    for i in 0..n.saturating_sub(1) {
        let (row, tail) = std::mem::take(&mut rest).split_at_mut(n - i - 1);
        rows.push((i, row));
        rest = tail;
    }
    rows.into_par_iter().for_each(|(i, row)| {
        for (k, slot) in row.iter_mut().enumerate() {
            *slot = u8::from(labels[i] == labels[i + 1 + k]);
        }
    });
    log::debug!("par_comembership done, n : {}", n);
    //
    comembership
} // end of par_comembership

//================================================================================

// end of mod tests
