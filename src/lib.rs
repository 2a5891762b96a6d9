//! Comparison of clusterizations of the same observations.
//!
//! - [comembership](comembership::comembership) : pairs of observations sharing a label, as a flat 0/1 vector.
//! - [variation_of_information](vi::variation_of_information) : information distance between two clusterizations.
//! - [Contingency](contingency::Contingency) : contingency table, entropies, mutual information and its normalized versions.
//! - [similarity] : Rand and Jaccard indexes from pair counting.
//!
//! All functions are pure, labels can be of any type satisfying Hash + Eq (integers, strings ...).

use lazy_static::lazy_static;

pub mod prelude;

pub mod error;

pub mod affect;
pub mod comembership;
pub mod contingency;
pub mod entropy;
pub mod similarity;
pub mod vi;

lazy_static! {
    static ref LOG: u64 = init_log();
}

#[allow(unused)]
// install a logger facility
fn init_log() -> u64 {
    let _res = env_logger::try_init();
    log::debug!("clusteval logger initialized");
    1
}

#[cfg(test)]
mod tests {
    #[test]
    // initialize once log system for tests.
    fn init_log() {
        let _res = env_logger::try_init();
    }
} // end of tests
