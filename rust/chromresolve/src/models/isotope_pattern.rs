use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::{
    DataProcessingError,
    Result,
};

/// An isotope pattern attached to a peak by a downstream deisotoping step.
///
/// Stored as parallel m/z and intensity arrays, same layout rationale as
/// [`ResolvedPeak`](crate::ResolvedPeak) itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopePattern {
    mzs: Vec<f64>,
    intensities: Vec<f64>,
    charge: i32,
    description: String,
}

impl IsotopePattern {
    pub fn try_new(
        mzs: Vec<f64>,
        intensities: Vec<f64>,
        charge: i32,
        description: impl Into<String>,
    ) -> Result<Self> {
        if mzs.is_empty() {
            return Err(DataProcessingError::ExpectedNonEmptyData.into());
        }
        if mzs.len() != intensities.len() {
            return Err(DataProcessingError::ExpectedVectorSameLength {
                real: intensities.len(),
                expected: mzs.len(),
            }
            .into());
        }
        Ok(Self {
            mzs,
            intensities,
            charge,
            description: description.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.mzs.len()
    }

    pub fn is_empty(&self) -> bool {
        // try_new rejects empty patterns, kept for clippy symmetry with len.
        self.mzs.is_empty()
    }

    pub fn mzs(&self) -> &[f64] {
        &self.mzs
    }

    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isotope_pattern_validation() {
        assert!(IsotopePattern::try_new(vec![], vec![], 1, "empty").is_err());
        assert!(IsotopePattern::try_new(vec![100.0, 101.0], vec![1.0], 1, "ragged").is_err());

        let pattern =
            IsotopePattern::try_new(vec![100.0, 101.0], vec![1.0, 0.4], 2, "M, M+1").unwrap();
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.charge(), 2);
        assert_eq!(pattern.description(), "M, M+1");
    }
}
