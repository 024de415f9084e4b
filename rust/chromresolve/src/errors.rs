use std::fmt::Display;

pub type Result<T, E = ChromresolveError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum ChromresolveError {
    DataProcessingError(DataProcessingError),
    Other(String),
}

impl Display for ChromresolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ChromresolveError {}

impl ChromresolveError {
    pub fn custom(msg: impl Display) -> Self {
        Self::Other(msg.to_string())
    }
}

/// Errors raised while validating or reducing trace data.
///
/// Note that these cover *expected* data problems only. Contract
/// violations (a region outside the trace, inverted bounds) are bugs
/// in the caller and panic instead of coming back as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataProcessingError {
    ExpectedNonEmptyData,
    ExpectedVectorSameLength { real: usize, expected: usize },
    ExpectedAscendingScanNumbers { position: usize },
    ExpectedMonotonicRetentionTimes { position: usize },
}

impl Display for DataProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<DataProcessingError> for ChromresolveError {
    fn from(e: DataProcessingError) -> Self {
        ChromresolveError::DataProcessingError(e)
    }
}
