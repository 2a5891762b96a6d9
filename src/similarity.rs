//! Pair counting comparison of two clusterizations.
//!
//! Each pair of observations is classified according to its comembership in the two clusterizations,
//! giving a 2x2 table from which the Rand and Jaccard indexes are computed.

use rayon::prelude::*;

use crate::error::{Result, check_same_length};

/// Agreement of the comembership relations of two clusterizations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ComembershipTable {
    /// pairs together in both clusterizations
    pub n11: usize,
    /// pairs together in the first clusterization only
    pub n10: usize,
    /// pairs together in the second clusterization only
    pub n01: usize,
    /// pairs separated in both clusterizations
    pub n00: usize,
}

impl ComembershipTable {
    #[inline]
    fn record(&mut self, together1: bool, together2: bool) {
        match (together1, together2) {
            (true, true) => self.n11 += 1,
            (true, false) => self.n10 += 1,
            (false, true) => self.n01 += 1,
            (false, false) => self.n00 += 1,
        }
    }

    /// total number of pairs counted
    pub fn get_nb_pairs(&self) -> usize {
        self.n11 + self.n10 + self.n01 + self.n00
    }

    /// proportion of pairs on which both clusterizations agree. 1. if there is no pair
    pub fn rand_index(&self) -> f64 {
        let total = self.get_nb_pairs();
        if total == 0 {
            return 1.;
        }
        (self.n11 + self.n00) as f64 / total as f64
    }

    /// pairs together in both clusterizations relative to pairs together in at least one.
    /// 1. if no pair is together in any clusterization
    pub fn jaccard(&self) -> f64 {
        let together = self.n11 + self.n10 + self.n01;
        if together == 0 {
            return 1.;
        }
        self.n11 as f64 / together as f64
    }
} // end of impl ComembershipTable

impl std::ops::Add for ComembershipTable {
    type Output = ComembershipTable;

    fn add(self, other: ComembershipTable) -> ComembershipTable {
        ComembershipTable {
            n11: self.n11 + other.n11,
            n10: self.n10 + other.n10,
            n01: self.n01 + other.n01,
            n00: self.n00 + other.n00,
        }
    }
}

/// counts pair agreements of the two clusterizations without storing comembership vectors.
pub fn comembership_table<L1, L2>(labels1: &[L1], labels2: &[L2]) -> Result<ComembershipTable>
where
    L1: PartialEq,
    L2: PartialEq,
{
    check_same_length(labels1.len(), labels2.len())?;
    let n = labels1.len();
    let mut table = ComembershipTable::default();
    for i in 0..n {
        for j in (i + 1)..n {
            table.record(labels1[i] == labels1[j], labels2[i] == labels2[j]);
        }
    }
    Ok(table)
} // end of comembership_table

/// parallel version of [comembership_table], one rayon task per observation row.
pub fn par_comembership_table<L1, L2>(labels1: &[L1], labels2: &[L2]) -> Result<ComembershipTable>
where
    L1: PartialEq + Sync,
    L2: PartialEq + Sync,
{
    check_same_length(labels1.len(), labels2.len())?;
    let n = labels1.len();
    let table = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut row = ComembershipTable::default();
            for j in (i + 1)..n {
                row.record(labels1[i] == labels1[j], labels2[i] == labels2[j]);
            }
            row
        })
        .reduce(ComembershipTable::default, |a, b| a + b);
    log::debug!("par_comembership_table : {:?}", table);
    Ok(table)
} // end of par_comembership_table

/// builds the table from two comembership vectors (as returned by [comembership](crate::comembership::comembership))
/// computed on the same number of observations.
pub fn comembership_table_from_vectors(
    comembership1: &[u8],
    comembership2: &[u8],
) -> Result<ComembershipTable> {
    check_same_length(comembership1.len(), comembership2.len())?;
    let table = comembership1.iter().zip(comembership2.iter()).fold(
        ComembershipTable::default(),
        |mut acc, (c1, c2)| {
            acc.record(*c1 != 0, *c2 != 0);
            acc
        },
    );
    Ok(table)
}

/// pair counting similarity indexes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimilarityKind {
    Rand,
    Jaccard,
}

impl std::str::FromStr for SimilarityKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rand" => Ok(SimilarityKind::Rand),
            "jaccard" => Ok(SimilarityKind::Jaccard),
            _ => Err(format!("unknown similarity {}, expecting rand or jaccard", s)),
        }
    }
}

/// similarity in \[0,1\] of two clusterizations, 1 for identical partitions
pub fn cluster_similarity<L1, L2>(labels1: &[L1], labels2: &[L2], kind: SimilarityKind) -> Result<f64>
where
    L1: PartialEq + Sync,
    L2: PartialEq + Sync,
{
    let table = par_comembership_table(labels1, labels2)?;
    let similarity = match kind {
        SimilarityKind::Rand => table.rand_index(),
        SimilarityKind::Jaccard => table.jaccard(),
    };
    log::debug!("similarity {:?} : {:.3e}", kind, similarity);
    Ok(similarity)
}

//================================================================================

// end of mod tests
