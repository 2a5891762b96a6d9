//! errors returned by clustering comparisons

/// Errors raised when two clusterizations cannot be compared.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClustEvalError {
    /// the two label sequences do not have the same number of observations
    #[error("invalid argument: label sequences have different lengths ({len1} != {len2})")]
    InvalidArgument { len1: usize, len2: usize },

    /// a data id of the first clusterization has no label in the second
    #[error("data id {0} has no affectation in second clusterization")]
    MissingData(String),
}

pub type Result<T> = std::result::Result<T, ClustEvalError>;

/// check the two sequences can be compared observation by observation
pub(crate) fn check_same_length(len1: usize, len2: usize) -> Result<()> {
    if len1 != len2 {
        log::error!("label sequences of different lengths : {} {}", len1, len2);
        return Err(ClustEvalError::InvalidArgument { len1, len2 });
    }
    Ok(())
}

// end of mod tests
