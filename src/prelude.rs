// inclusion facility

pub use crate::error::ClustEvalError;

pub use crate::affect::*;

pub use crate::comembership::*;

pub use crate::contingency::*;

pub use crate::entropy::*;

pub use crate::similarity::*;

pub use crate::vi::*;
