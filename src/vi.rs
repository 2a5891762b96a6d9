//! Variation of information between two clusterizations given as label sequences.
//!
//! Meila M. Comparing clusterings, an information based distance. Journal of Multivariate Analysis 2007.
//!
//! Empty sequences are accepted : both entropies are 0 over an empty distribution so the distance is 0.

use ndarray::{Array1, Array2};
use num_traits::int::PrimInt;
use num_traits::sign::Unsigned;
use std::hash::Hash;

use crate::affect::SliceAffectation;
use crate::contingency::{Contingency, TableEntropies};
use crate::error::{Result, check_same_length};

#[cfg_attr(doc, katexit::katexit)]
/// returns $ VI = H(C_{1}) + H(C_{2}) - 2 I(C_{1}, C_{2}) $ (natural logarithm).
///
/// labels1\[i\] and labels2\[i\] are the labels of observation i in each clusterization.
/// Labels are opaque and need not be of the same type, so the result does not depend on label names.
/// The result is in $ [0, \log n] $ and is 0 iff the 2 sequences induce the same partition.
///
/// Fails with [ClustEvalError::InvalidArgument] if sequences do not have the same length.
pub fn variation_of_information<L1, L2>(labels1: &[L1], labels2: &[L2]) -> Result<f64>
where
    L1: Hash + Eq + std::fmt::Debug,
    L2: Hash + Eq + std::fmt::Debug,
{
    check_same_length(labels1.len(), labels2.len())?;
    let contingency = Contingency::new(
        &SliceAffectation::new(labels1),
        &SliceAffectation::new(labels2),
    )?;
    let vi = contingency.get_variation_of_information();
    log::debug!(
        "variation_of_information n : {}, clusters : {:?}, vi : {:.3e}",
        labels1.len(),
        contingency.get_dim(),
        vi
    );
    Ok(vi)
} // end of variation_of_information

// above this number of cells, a dense table is not worth it compared to hashing labels
const DENSE_MIN_CELLS: usize = 1 << 16;

// upper bound on the number of cells of a dense table for nb_points observations
fn dense_cells_bound(nb_points: usize) -> usize {
    DENSE_MIN_CELLS.max(nb_points.saturating_mul(16))
}

/// Same result as [variation_of_information] for small unsigned integer labels.
///
/// The contingency table is indexed directly by label values, avoiding hashing.
/// Its size is (max(labels1)+1) * (max(labels2)+1) so it is meant for labels that are cluster ranks,
/// unused label values only add cells at 0 that do not contribute.
/// When the labels do not fit an usize or the table would exceed max(2^16, 16 * n) cells
/// the computation goes through [variation_of_information].
pub fn dense_variation_of_information<L>(labels1: &[L], labels2: &[L]) -> Result<f64>
where
    L: PrimInt + Unsigned + Hash + std::fmt::Debug,
{
    check_same_length(labels1.len(), labels2.len())?;
    let nb_points = labels1.len();
    //
    let mut ranks = Vec::<(usize, usize)>::with_capacity(nb_points);
    let mut nb_row: usize = 0;
    let mut nb_col: usize = 0;
    for (l1, l2) in labels1.iter().zip(labels2.iter()) {
        let dims = match (l1.to_usize(), l2.to_usize()) {
            (Some(r1), Some(r2)) => r1.checked_add(1).zip(r2.checked_add(1)).map(|d| (r1, r2, d)),
            _ => None,
        };
        let Some((r1, r2, (d1, d2))) = dims else {
            log::debug!("labels {:?} {:?} not usable as indexes, hashing labels", l1, l2);
            return variation_of_information(labels1, labels2);
        };
        nb_row = nb_row.max(d1);
        nb_col = nb_col.max(d2);
        ranks.push((r1, r2));
    }
    match nb_row.checked_mul(nb_col) {
        Some(nb_cells) if nb_cells <= dense_cells_bound(nb_points) => (),
        _ => {
            log::debug!(
                "dense table ({},{}) too large for {} points, hashing labels",
                nb_row,
                nb_col,
                nb_points
            );
            return variation_of_information(labels1, labels2);
        }
    }
    let mut table = Array2::<usize>::zeros((nb_row, nb_col));
    let mut c1_size = Array1::<usize>::zeros(nb_row);
    let mut c2_size = Array1::<usize>::zeros(nb_col);
    for (r1, r2) in ranks {
        c1_size[r1] += 1;
        c2_size[r2] += 1;
        table[[r1, r2]] += 1;
    }
    log::debug!("dense contingency table ({},{})", nb_row, nb_col);
    let entropies = TableEntropies::from_table(&table, &c1_size, &c2_size, nb_points);
    Ok(entropies.variation_of_information())
} // end of dense_variation_of_information

//================================================================================

// end of mod tests
