//! reading of label files and reporting of clusterization comparisons

pub mod io;
pub mod report;
