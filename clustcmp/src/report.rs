//! summary of the comparison of two clusterizations

use std::hash::Hash;

use clusteval::prelude::*;

/// all quantities computed when comparing two clusterizations
#[derive(Clone, Debug)]
pub struct ComparisonReport {
    pub nb_points: usize,
    pub nb_clusters1: usize,
    pub nb_clusters2: usize,
    pub entropy_1: f64,
    pub entropy_2: f64,
    pub information: f64,
    pub variation_of_information: f64,
    pub normalized_vi: f64,
    pub nmi_sqrt: f64,
    pub rand_index: f64,
    pub jaccard: f64,
}

impl ComparisonReport {
    /// compares labels1 (rows) with labels2 (columns)
    pub fn new<L>(labels1: &[L], labels2: &[L]) -> anyhow::Result<Self>
    where
        L: Hash + Eq + Sync + std::fmt::Debug,
    {
        let contingency = Contingency::new(
            &SliceAffectation::new(labels1),
            &SliceAffectation::new(labels2),
        )?;
        contingency.dump_entropies();
        let table = par_comembership_table(labels1, labels2)?;
        let (nb_clusters1, nb_clusters2) = contingency.get_dim();
        Ok(ComparisonReport {
            nb_points: contingency.get_nb_points(),
            nb_clusters1,
            nb_clusters2,
            entropy_1: contingency.get_entropy_1(),
            entropy_2: contingency.get_entropy_2(),
            information: contingency.get_information(),
            variation_of_information: contingency.get_variation_of_information(),
            normalized_vi: contingency.get_normalized_vi(),
            nmi_sqrt: contingency.get_nmi_sqrt(),
            rand_index: table.rand_index(),
            jaccard: table.jaccard(),
        })
    }
} // end of impl ComparisonReport

impl std::fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " nb points : {}", self.nb_points)?;
        writeln!(
            f,
            " nb clusters : {} , {}",
            self.nb_clusters1, self.nb_clusters2
        )?;
        writeln!(
            f,
            " entropies : {:.3e} , {:.3e}",
            self.entropy_1, self.entropy_2
        )?;
        writeln!(f, " mutual information : {:.3e}", self.information)?;
        writeln!(
            f,
            " variation of information : {:.6e} (normalized : {:.3e})",
            self.variation_of_information, self.normalized_vi
        )?;
        writeln!(f, " nmi sqrt : {:.3e}", self.nmi_sqrt)?;
        write!(
            f,
            " rand index : {:.3e} jaccard : {:.3e}",
            self.rand_index, self.jaccard
        )
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn report_crossed() {
        log_init_test();
        let l1: Vec<String> = ["1", "1", "2", "2"].iter().map(|s| s.to_string()).collect();
        let l2: Vec<String> = ["1", "2", "1", "2"].iter().map(|s| s.to_string()).collect();
        let report = ComparisonReport::new(&l1, &l2).unwrap();
        log::info!("\n{}", report);
        assert_eq!(report.nb_points, 4);
        assert_eq!((report.nb_clusters1, report.nb_clusters2), (2, 2));
        assert!((report.variation_of_information - 2. * 2f64.ln()).abs() < 1.0e-12);
        assert!(report.information.abs() < 1.0e-12);
        assert!((report.rand_index - 1. / 3.).abs() < 1.0e-12);
        assert!(format!("{}", report).contains("variation of information"));
    }

    #[test]
    fn report_mismatch() {
        log_init_test();
        let l1 = vec!["a".to_string(); 3];
        let l2 = vec!["a".to_string(); 2];
        let err = ComparisonReport::new(&l1, &l2).unwrap_err();
        assert!(format!("{}", err).contains("different lengths"));
    }
} // end of mod tests
