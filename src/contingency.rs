//! This module implements various mutual information from contingency table computation

use indexmap::IndexSet;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::hash::Hash;

use crate::affect::Affectation;
use crate::entropy::{entropy_from_counts, safe_log_term};
use crate::error::{ClustEvalError, Result, check_same_length};

//================================================================================

/// entropies and information computed from a count table
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct TableEntropies {
    pub(crate) entropy_1: f64,
    pub(crate) entropy_2: f64,
    pub(crate) entropy_12: f64,
    pub(crate) entropy_1cond2: f64,
    pub(crate) entropy_2cond1: f64,
    pub(crate) information_12: f64,
}

impl TableEntropies {
    /// computes all quantities from table, its row sums (c1_size) and column sums (c2_size).
    /// Cells at 0 contribute 0 to every sum.
    pub(crate) fn from_table(
        table: &Array2<usize>,
        c1_size: &Array1<usize>,
        c2_size: &Array1<usize>,
        nb_total_usize: usize,
    ) -> Self {
        if nb_total_usize == 0 {
            return TableEntropies::default();
        }
        let nb_total = nb_total_usize as f64;
        let entropy_1 = entropy_from_counts(c1_size.iter(), nb_total_usize);
        let entropy_2 = entropy_from_counts(c2_size.iter(), nb_total_usize);
        let entropy_12 = entropy_from_counts(table.iter(), nb_total_usize);
        //
        let (nb_labels1, nb_labels2) = table.dim();
        let mut entropy_1cond2: f64 = 0.;
        let mut entropy_2cond1: f64 = 0.;
        let mut information_12: f64 = 0.;
        for i in 0..nb_labels1 {
            let frac_i: f64 = c1_size[i] as f64 / nb_total;
            for j in 0..nb_labels2 {
                let frac_ij = table[[i, j]] as f64 / nb_total;
                if frac_ij == 0. {
                    continue;
                }
                let frac_j: f64 = c2_size[j] as f64 / nb_total;
                //
                entropy_1cond2 -= safe_log_term(frac_ij, frac_j);
                entropy_2cond1 -= safe_log_term(frac_ij, frac_i);
                information_12 += safe_log_term(frac_ij, frac_i * frac_j);
            }
        }
        log::trace!(
            "table entropies h1 {:.3e} h2 {:.3e} i12 {:.3e}",
            entropy_1,
            entropy_2,
            information_12
        );
        TableEntropies {
            entropy_1,
            entropy_2,
            entropy_12,
            entropy_1cond2: entropy_1cond2.max(0.),
            entropy_2cond1: entropy_2cond1.max(0.),
            information_12: information_12.max(0.),
        }
    } // end of from_table

    #[cfg_attr(doc, katexit::katexit)]
    /// $ VI(C_{1}, C_{2}) = H(C_{1}) + H(C_{2}) - 2 I(C_{1}, C_{2}) $, rounding errors below 0 are clamped.
    pub(crate) fn variation_of_information(&self) -> f64 {
        (self.entropy_1 + self.entropy_2 - 2. * self.information_12).max(0.)
    }
} // end of impl TableEntropies

//================================================================================

#[cfg_attr(doc, katexit::katexit)]
/// Contingency table associated to the 2 clusterization (affectations) to compare.
/// We can compare either an algorithm to reference labels of data or 2 clusters algorithms.
/// The various merit functions relies on comparisons entropy of cluster distribution.
///
///
/// We contruct a contingency matrix $ \left(n_{ij} \right) $  with $ i \le n_{1}, j \le n_{2} $ with $ n_{ij} =   | C_{1}[i] \cap C_{2}[j] | $ with $ C_{1}[i] $ designing the i-th cluster in C1 clusterization.
/// We call:
/// - N : the number of elements to cluster
/// - $NC_{1}$ (resp. $NC_{2}$) the number of clusters of the first (resp. second) clusterization.
///
/// The following entropies are then computed (natural logarithm, with $ 0 \log 0 = 0 $):
/// - $ H(C_{1}) = - \sum_{i \le NC_{1}}  \frac{|C_1[i]|}{N} \log \frac{|C_1[i]|}{N} $
/// - $ H(C_{2}) = - \sum_{i \le NC_{2}}  \frac{|C_2[i]|}{N} \log \frac{|C_2[i]|}{N} $
/// - $ H(C_{1},C_{2}) = - \sum_{i \le NC_{1}, j \le NC_{2}}  \frac{n_{ij}}{N} \log \frac{n_{ij}}{N} $
/// - $ H(C_{1}| C_{2}) = - \sum_{i \le NC_{1}, j \le NC_{2}}  \frac{n_{ij}}{N} \log \frac{n_{ij}/N} {|C_2[j]|/N} $
/// - $ I(C_{1}, C_{2}) = \sum_{i \le NC_{1}, j \le NC_{2}}  \frac{n_{ij}}{N} \log \frac{n_{ij}/N} { |C_1[i]| *|C_2[j]|/N^{2}} $.
/// - $ VI(C_{1}, C_{2}) = H(C_{1}) + H(C_{2}) - 2 I(C_{1}, C_{2}) $
///
/// Labels are mapped to rows (columns) in order of first encounter while iterating on the first clusterization.
/// Various indicators can then be computed (some are even metrics), see the different functions.
pub struct Contingency<Label1, Label2>
where
    Label1: Hash + Eq + Clone + std::fmt::Debug,
    Label2: Hash + Eq + Clone + std::fmt::Debug,
{
    nb_points: usize,
    // transform labels set to usize range for array indexation
    labels1: IndexSet<Label1>,
    labels2: IndexSet<Label2>,
    // The contingency table. dimension (cluster1.nb_cluster, cluster2.nb_cluster)
    table: Array2<usize>,
    // number of elements in each clusters of cluster1
    c1_size: Array1<usize>,
    // number of elements in each clusters of cluster2
    c2_size: Array1<usize>,
    // entropies and information
    entropies: TableEntropies,
}

impl<Label1, Label2> Contingency<Label1, Label2>
where
    Label1: Hash + Eq + Clone + std::fmt::Debug,
    Label2: Hash + Eq + Clone + std::fmt::Debug,
{
    /// **The first (resp. second) argument will be used as rows (resp. columns) of the contingency matrix**
    ///
    /// The two clusterizations share their DataId but can have labels of different types.
    /// Fails with [ClustEvalError::InvalidArgument] if the clusterizations do not have the same number of points
    /// and with [ClustEvalError::MissingData] if a data of the first one is not affected in the second one.
    pub fn new<DataId, C1, C2>(clusters1: &C1, clusters2: &C2) -> Result<Self>
    where
        DataId: Hash + Eq + Copy + std::fmt::Debug,
        C1: Affectation<DataId, Label1>,
        C2: Affectation<DataId, Label2>,
    {
        let nb_points = clusters1.get_nb_points();
        check_same_length(nb_points, clusters2.get_nb_points())?;
        //
        log::debug!("entering Contingency::new, nb points : {}", nb_points);
        //
        // converts labels to contiguous interval of usize. label_rank = IndexSet::get_index_of(label)
        //
        let mut labels1 = IndexSet::<Label1>::with_capacity(50);
        let mut labels2 = IndexSet::<Label2>::with_capacity(50);
        let mut ranks = Vec::<(usize, usize)>::with_capacity(nb_points);
        // we loop on clusters1, query each item relatively to clusters2
        for (id1, label1) in clusters1.iter() {
            let label2 = clusters2
                .get_affectation(id1)
                .ok_or_else(|| ClustEvalError::MissingData(format!("{:?}", id1)))?;
            let (rank_l1, _) = labels1.insert_full(label1);
            let (rank_l2, _) = labels2.insert_full(label2);
            ranks.push((rank_l1, rank_l2));
        }
        let nb_labels1 = labels1.len();
        let nb_labels2 = labels2.len();
        let mut table = Array2::<usize>::zeros((nb_labels1, nb_labels2));
        let mut c1_size = Array1::<usize>::zeros(nb_labels1);
        let mut c2_size = Array1::<usize>::zeros(nb_labels2);
        // summing on columns each item in cluster1 appears exactly once
        // and summing on rows item in cluster2 appears exactly once
        for (rank_l1, rank_l2) in ranks {
            c1_size[rank_l1] += 1;
            c2_size[rank_l2] += 1;
            table[[rank_l1, rank_l2]] += 1;
        }
        log::debug!("contingency table computed ({},{})", nb_labels1, nb_labels2);
        //
        let entropies = TableEntropies::from_table(&table, &c1_size, &c2_size, nb_points);
        //
        Ok(Contingency {
            nb_points,
            labels1,
            labels2,
            table,
            c1_size,
            c2_size,
            entropies,
        })
    } // end of new

    /// returns number of points in each clusterization
    pub fn get_nb_points(&self) -> usize {
        self.nb_points
    }

    /// returns entropy of cluster 1 distribution
    pub fn get_entropy_1(&self) -> f64 {
        self.entropies.entropy_1
    }

    /// returns entropy of cluster 2 distribution
    pub fn get_entropy_2(&self) -> f64 {
        self.entropies.entropy_2
    }

    /// returns joint entropy of clusters distribution
    pub fn get_joint_entropy(&self) -> f64 {
        self.entropies.entropy_12
    }

    pub fn get_entropy_1cond2(&self) -> f64 {
        self.entropies.entropy_1cond2
    }

    pub fn get_entropy_2cond1(&self) -> f64 {
        self.entropies.entropy_2cond1
    }

    pub fn get_information(&self) -> f64 {
        self.entropies.information_12
    }

    #[cfg_attr(doc, katexit::katexit)]
    /// returns $ VI(C_{1}, C_{2}) = H(C_{1}) + H(C_{2}) - 2 I(C_{1}, C_{2}) $.
    /// It is a metric on partitions, 0 iff the 2 clusterizations define the same partition, bounded by $ \log N $.
    pub fn get_variation_of_information(&self) -> f64 {
        self.entropies.variation_of_information()
    }

    #[cfg_attr(doc, katexit::katexit)]
    /// returns $ \frac{VI(C_{1}, C_{2})}{\log N} $ in \[0,1\]. 0 if N <= 1
    pub fn get_normalized_vi(&self) -> f64 {
        if self.nb_points <= 1 {
            return 0.;
        }
        (self.get_variation_of_information() / (self.nb_points as f64).ln()).min(1.)
    }

    /// returns marginal frequencies of first clusterization labels (in row order)
    pub fn get_marginal_1(&self) -> Array1<f64> {
        let nb_total = self.nb_points as f64;
        self.c1_size.mapv(|c| c as f64 / nb_total)
    }

    /// returns marginal frequencies of second clusterization labels (in column order)
    pub fn get_marginal_2(&self) -> Array1<f64> {
        let nb_total = self.nb_points as f64;
        self.c2_size.mapv(|c| c as f64 / nb_total)
    }

    /// returns joint frequencies table
    pub fn get_joint_frequencies(&self) -> Array2<f64> {
        let nb_total = self.nb_points as f64;
        self.table.mapv(|c| c as f64 / nb_total)
    }

    /// logs the various entropies computed
    pub fn dump_entropies(&self) {
        log::info!(" entropy1 : {:.3e}", self.entropies.entropy_1);
        log::info!(" entropy2 : {:.3e}", self.entropies.entropy_2);
        log::info!(" entropy_12 : {:.3e}", self.entropies.entropy_12);
        log::info!(" entropy_1cond2 : {:.3e}", self.entropies.entropy_1cond2);
        log::info!(" entropy_2cond1 : {:.3e}", self.entropies.entropy_2cond1);
        log::info!(
            " information_12: {:.3e} expectation upper bound {:.3e}",
            self.entropies.information_12,
            self.information_12_expectation_upper()
        );
        log::info!(
            " variation of information : {:.3e}",
            self.get_variation_of_information()
        );
    }

    // normalization of information. When the normalizing entropy is 0 one of the clusterization
    // has only one cluster, information is 0 and both are equal only if both are trivial.
    fn normalize_information(&self, denominator: f64) -> f64 {
        if denominator > 0. {
            (self.entropies.information_12 / denominator).min(1.)
        } else if self.c1_size.len() <= 1 && self.c2_size.len() <= 1 {
            1.
        } else {
            0.
        }
    }

    #[cfg_attr(doc, katexit::katexit)]
    /// compute normalized mutual information joint version.
    /// returns $ \frac{I(C_{1}, C_{2})}{H(C_{1}, C_{2})} $.
    /// Note that : $ 1. - \frac{I(C_{1}, C_{2})}{H(C_{1}, C_{2})} $ is a metric.
    pub fn get_nmi_joint(&self) -> f64 {
        self.normalize_information(self.entropies.entropy_12)
    }

    #[cfg_attr(doc, katexit::katexit)]
    /// compute normalized mutual information max version
    /// returns $ \frac{I(C_{1}, C_{2})}{max (H(C_{1}),  H(C_{2})} $.
    /// Note that : $ 1. - \frac{I(C_{1}, C_{2})}{max (H(C_{1}),  H(C_{2})} $ is a metric.
    pub fn get_nmi_max(&self) -> f64 {
        self.normalize_information(self.entropies.entropy_1.max(self.entropies.entropy_2))
    }

    #[cfg_attr(doc, katexit::katexit)]
    /// compute normalized mutual information mean version
    /// returns $ \frac{I(C_{1}, C_{2})}{0.5 * (H(C_{1}) +  H(C_{2})} $.
    pub fn get_nmi_mean(&self) -> f64 {
        self.normalize_information(0.5 * (self.entropies.entropy_1 + self.entropies.entropy_2))
    }

    #[cfg_attr(doc, katexit::katexit)]
    /// compute normalized mutual information sqrt version
    /// returns $ \frac{I(C_{1}, C_{2}) }{\sqrt{ H(C_{1}) * H(C_{2})} } $
    /// The function logs as debug lower bound of the adjusted value. For large number of data, the correction is negligible
    pub fn get_nmi_sqrt(&self) -> f64 {
        let denominator = (self.entropies.entropy_1 * self.entropies.entropy_2).sqrt();
        let nmi = self.normalize_information(denominator);
        let iup = self.information_12_expectation_upper();
        if denominator > iup {
            let ami = (self.entropies.information_12 - iup) / (denominator - iup);
            log::debug!("adjusted nmi_sqrt will be greater than : {:.3e}", ami);
        }
        nmi
    }

    /// computes upper bound for expectation of cross information, valid for large n
    /// See Th 7 from [Vinh 2010](https://jmlr.csail.mit.edu/papers/volume11/vinh10a/vinh10a.pdf)
    pub fn information_12_expectation_upper(&self) -> f64 {
        if self.nb_points <= 1 {
            return 0.;
        }
        let nbclust1 = self.c1_size.len();
        let nbclust2 = self.c2_size.len();
        // N + nbclust1 * nbclust2 - nbclust1 - nbclust2 rewritten to stay in usize
        let n: usize = (self.nb_points - 1) + (nbclust1 - 1) * (nbclust2 - 1);
        let d: usize = self.nb_points - 1;
        (n as f64 / d as f64).ln()
    }

    // methods to get entropies by row

    /// return entropy of distribution of items in clust of first (row) clusterization along the second (columns) clusterization
    /// The purpose is to find which clusters of the first Clusterization are distributed with less incertitude.
    /// Panics if row is not a valid row index
    pub fn get_row_entropy(&self, row: usize) -> f64 {
        entropy_from_counts(self.table.row(row).iter(), self.c1_size[row])
    } // end of get_row_entropy

    /// return entropy of distribution of items in clust of second (col) clusterization along the first (rows) clusterization.
    /// Panics if col is not a valid column index
    pub fn get_column_entropy(&self, col: usize) -> f64 {
        entropy_from_counts(self.table.column(col).iter(), self.c2_size[col])
    }

    /// collect row entropies for all rows (fist clusterization)
    pub fn get_row_entropies(&self) -> Vec<f64> {
        let (nb_row, _) = self.table.dim();
        (0..nb_row)
            .map(|i| self.get_row_entropy(i))
            .collect::<Vec<f64>>()
    }

    /// collect column entropies for all columns (second clusterization)
    pub fn get_col_entropies(&self) -> Vec<f64> {
        let (_, nb_col) = self.table.dim();
        (0..nb_col)
            .map(|j| self.get_column_entropy(j))
            .collect::<Vec<f64>>()
    }

    pub fn get_row(&self, row: usize) -> ArrayView1<'_, usize> {
        self.table.row(row)
    }

    pub fn get_col(&self, col: usize) -> ArrayView1<'_, usize> {
        self.table.column(col)
    }

    pub fn get_dim(&self) -> (usize, usize) {
        self.table.dim()
    }

    pub fn get_table(&self) -> ArrayView2<'_, usize> {
        self.table.view()
    }

    /// return a vector correspondance between rank of rows and labels of first clusterization.
    /// I.e the k entry of the vector gives the label of the row k.
    pub fn get_row_labels(&self) -> Vec<Label1> {
        self.labels1.iter().cloned().collect()
    }

    /// return a vector correspondance between rank of columns and labels of second clusterization.
    pub fn get_column_labels(&self) -> Vec<Label2> {
        self.labels2.iter().cloned().collect()
    } // end of get_column_labels
} // end of Contingency

//================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::affect::{HashAffectation, SliceAffectation, VecAffectation};
    use std::collections::HashMap;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn table_and_marginals() {
        log_init_test();
        let l1 = vec![1, 1, 2, 2, 3];
        let l2 = vec!["a", "a", "b", "b", "b"];
        let c = Contingency::new(&VecAffectation::new(l1), &VecAffectation::new(l2)).unwrap();
        c.dump_entropies();
        assert_eq!(c.get_dim(), (3, 2));
        assert_eq!(c.get_row(2).to_vec(), vec![0, 1]);
        let joint = c.get_joint_frequencies();
        let m1 = c.get_marginal_1();
        let m2 = c.get_marginal_2();
        assert!((joint.sum() - 1.).abs() < 1.0e-12);
        assert!((m1.sum() - 1.).abs() < 1.0e-12);
        assert!((m2.sum() - 1.).abs() < 1.0e-12);
        // row and column sums of joint are marginals
        for i in 0..3 {
            assert!((joint.row(i).sum() - m1[i]).abs() < 1.0e-12);
        }
        for j in 0..2 {
            assert!((joint.column(j).sum() - m2[j]).abs() < 1.0e-12);
        }
        // no NaN with structurally absent cells
        assert!(c.get_information().is_finite());
        assert!(c.get_variation_of_information().is_finite());
    }

    #[test]
    fn vi_decomposes_into_conditional_entropies() {
        log_init_test();
        let l1 = vec![0u8, 0, 1, 1, 2, 2, 2, 0];
        let l2 = vec![5u8, 6, 6, 6, 5, 5, 7, 7];
        let c = Contingency::new(&SliceAffectation::new(&l1), &SliceAffectation::new(&l2))
            .unwrap();
        let vi = c.get_variation_of_information();
        let cond = c.get_entropy_1cond2() + c.get_entropy_2cond1();
        log::debug!("vi : {:.3e} sum of conditionals : {:.3e}", vi, cond);
        assert!((vi - cond).abs() < 1.0e-12);
        // H(1,2) = H(1) + H(2|1)
        assert!((c.get_joint_entropy() - c.get_entropy_1() - c.get_entropy_2cond1()).abs() < 1.0e-12);
        let nvi = c.get_normalized_vi();
        assert!((0. ..=1.).contains(&nvi));
    }

    #[test]
    fn identical_partitions() {
        log_init_test();
        let l1 = vec![3, 3, 1, 1, 2];
        let l2 = vec!["z", "z", "x", "x", "y"];
        let c = Contingency::new(&VecAffectation::new(l1), &VecAffectation::new(l2)).unwrap();
        assert!(c.get_variation_of_information().abs() < 1.0e-12);
        assert!((c.get_nmi_joint() - 1.).abs() < 1.0e-12);
        assert!((c.get_nmi_max() - 1.).abs() < 1.0e-12);
        assert!((c.get_nmi_mean() - 1.).abs() < 1.0e-12);
        assert!((c.get_nmi_sqrt() - 1.).abs() < 1.0e-12);
        assert_eq!(c.get_row_entropies(), vec![0., 0., 0.]);
        assert_eq!(c.get_col_entropies(), vec![0., 0., 0.]);
    }

    #[test]
    fn trivial_clusterizations() {
        log_init_test();
        let single = vec![7; 4];
        let c = Contingency::new(&SliceAffectation::new(&single), &SliceAffectation::new(&single))
            .unwrap();
        assert_eq!(c.get_entropy_1(), 0.);
        assert_eq!(c.get_variation_of_information(), 0.);
        assert_eq!(c.get_nmi_sqrt(), 1.);
        //
        let spread = vec![0, 1, 2, 3];
        let c = Contingency::new(&SliceAffectation::new(&single), &SliceAffectation::new(&spread))
            .unwrap();
        assert_eq!(c.get_information(), 0.);
        assert_eq!(c.get_nmi_sqrt(), 0.);
        assert!((c.get_variation_of_information() - 4f64.ln()).abs() < 1.0e-12);
        assert!((c.get_normalized_vi() - 1.).abs() < 1.0e-12);
        //
        let empty: Vec<u32> = Vec::new();
        let c = Contingency::new(&SliceAffectation::new(&empty), &SliceAffectation::new(&empty))
            .unwrap();
        assert_eq!(c.get_dim(), (0, 0));
        assert_eq!(c.get_variation_of_information(), 0.);
        assert_eq!(c.get_normalized_vi(), 0.);
        assert_eq!(c.information_12_expectation_upper(), 0.);
    }

    #[test]
    fn information_expectation_bound() {
        log_init_test();
        let l1 = vec![0u8, 0, 1, 1, 2, 2];
        let l2 = vec!["a", "a", "a", "a", "b", "b"];
        let c = Contingency::new(&VecAffectation::new(l1), &VecAffectation::new(l2)).unwrap();
        assert_eq!(c.get_dim(), (3, 2));
        // ln((N + k1*k2 - k1 - k2) / (N - 1)) with N = 6, k1 = 3, k2 = 2
        let expected = ((6. + 6. - 3. - 2.) / 5f64).ln();
        let bound = c.information_12_expectation_upper();
        log::debug!("expectation bound : {:.6e}", bound);
        assert!((bound - expected).abs() < 1.0e-12);
        assert!(bound > 0.);
    }

    #[test]
    fn labels_rank() {
        log_init_test();
        let l1 = vec!["b", "a", "b", "c"];
        let l2 = vec![2, 2, 1, 1];
        let c = Contingency::new(&VecAffectation::new(l1), &VecAffectation::new(l2)).unwrap();
        assert_eq!(c.get_row_labels(), vec!["b", "a", "c"]);
        assert_eq!(c.get_column_labels(), vec![2, 1]);
        assert_eq!(c.get_row(0).to_vec(), vec![1, 1]);
    }

    #[test]
    fn length_mismatch_and_missing_data() {
        log_init_test();
        let l1 = vec![1, 2, 3];
        let l2 = vec![1, 2];
        let res = Contingency::new(&SliceAffectation::new(&l1), &SliceAffectation::new(&l2));
        assert_eq!(
            res.err(),
            Some(ClustEvalError::InvalidArgument { len1: 3, len2: 2 })
        );
        //
        let mut m1 = HashMap::<u32, u8>::new();
        let mut m2 = HashMap::<u32, u8>::new();
        m1.insert(1, 0);
        m1.insert(2, 0);
        m2.insert(1, 0);
        m2.insert(3, 1);
        let res = Contingency::new(&HashAffectation::new(m1), &HashAffectation::new(m2));
        assert!(matches!(res, Err(ClustEvalError::MissingData(_))));
    }

    #[test]
    fn hash_affectation_matches_vec() {
        log_init_test();
        let l1 = vec![0u8, 0, 1, 1, 1, 2];
        let l2 = vec![1u8, 0, 0, 1, 1, 1];
        let m1: HashMap<usize, u8> = l1.iter().cloned().enumerate().collect();
        let m2: HashMap<usize, u8> = l2.iter().cloned().enumerate().collect();
        let ch = Contingency::new(&HashAffectation::new(m1), &HashAffectation::new(m2)).unwrap();
        let cv = Contingency::new(&VecAffectation::new(l1), &VecAffectation::new(l2)).unwrap();
        assert!((ch.get_information() - cv.get_information()).abs() < 1.0e-12);
        assert!(
            (ch.get_variation_of_information() - cv.get_variation_of_information()).abs()
                < 1.0e-12
        );
    }
} // end of mod tests
