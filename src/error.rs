use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Memory allocation failed for {what} of {len} values. Reason: `{source}`.")]
    AllocationFailed {
        what: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("Unable to write report. Reason: `{0}`.")]
    Io(#[from] std::io::Error),
}

impl StatsError {
    pub(crate) fn allocation(what: &'static str, len: usize, source: TryReserveError) -> Self {
        StatsError::AllocationFailed { what, len, source }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
