//! entropy primitives with the convention 0 * log(0) = 0
//!

#[cfg_attr(doc, katexit::katexit)]
/// returns $ p \log \frac{p}{q} $ with the convention that the term is 0 as soon as p is 0.
/// The numerator is tested first so that $ \log(0) $ or $ \log(0/0) $ is never evaluated.
///
/// # Panics
/// if numerator is negative, it is a probability.
pub fn safe_log_term(numerator: f64, denominator: f64) -> f64 {
    if numerator > 0. {
        numerator * (numerator / denominator).ln()
    } else if numerator < 0. {
        panic!("log term cannot have negative probability {}", numerator);
    } else {
        0.
    }
}

#[cfg_attr(doc, katexit::katexit)]
/// entropy $ H(p) = - \sum_{i} p_{i} \log p_{i} $ of a discrete distribution (natural log).
///
/// # Panics
/// if some probability is negative.
pub fn entropy(probas: &[f64]) -> f64 {
    let h = probas.iter().fold(0., |acc, p| acc - safe_log_term(*p, 1.));
    // -0. for empty or single point distributions
    h.max(0.)
}

/// entropy of the empirical distribution given by counts over nb_total observations
pub fn entropy_from_counts<'a>(counts: impl Iterator<Item = &'a usize>, nb_total: usize) -> f64 {
    if nb_total == 0 {
        return 0.;
    }
    let nb_total = nb_total as f64;
    let h = counts.fold(0., |acc, c| acc - safe_log_term(*c as f64 / nb_total, 1.));
    h.max(0.)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn zero_numerator_is_zero() {
        log_init_test();
        assert_eq!(safe_log_term(0., 0.), 0.);
        assert_eq!(safe_log_term(0., 0.5), 0.);
        assert_eq!(safe_log_term(0.5, 0.5), 0.);
        assert!((safe_log_term(0.5, 0.25) - 0.5 * 2f64.ln()).abs() < 1.0e-15);
    }

    #[test]
    #[should_panic]
    fn negative_probability_panics() {
        let _ = entropy(&[0.5, -0.5, 1.]);
    }

    #[test]
    fn uniform_entropy() {
        log_init_test();
        let p = vec![0.25; 4];
        assert!((entropy(&p) - 4f64.ln()).abs() < 1.0e-12);
        // a zero slot does not change anything
        let p = vec![0.5, 0., 0.5];
        assert!((entropy(&p) - 2f64.ln()).abs() < 1.0e-12);
    }

    #[test]
    fn degenerate_entropies() {
        log_init_test();
        assert_eq!(entropy(&[]), 0.);
        assert_eq!(entropy(&[1.]), 0.);
        let counts: Vec<usize> = vec![];
        assert_eq!(entropy_from_counts(counts.iter(), 0), 0.);
        let counts: Vec<usize> = vec![5];
        assert_eq!(entropy_from_counts(counts.iter(), 5), 0.);
    }

    #[test]
    fn counts_match_probas() {
        log_init_test();
        let counts: Vec<usize> = vec![3, 1, 0, 4];
        let probas: Vec<f64> = counts.iter().map(|c| *c as f64 / 8.).collect();
        let h1 = entropy_from_counts(counts.iter(), 8);
        let h2 = entropy(&probas);
        log::debug!("h from counts : {:.3e}, from probas : {:.3e}", h1, h2);
        assert!((h1 - h2).abs() < 1.0e-12);
        assert!(h1 > 0.);
    }
} // end of mod tests
