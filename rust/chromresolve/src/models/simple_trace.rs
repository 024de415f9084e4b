use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::{
    DataProcessingError,
    Result,
};
use crate::models::{
    DataPoint,
    FragmentEvent,
};
use crate::traits::{
    ChromatogramSource,
    FragmentEventIndex,
};
use crate::utils::TupleRange;

/// An in-memory chromatographic trace.
///
/// Owns one slot per MS1 scan; a `None` slot is a missing sample, which the
/// summarizer zero-fills rather than skips. Fragmentation events live in a
/// separate list since only a subset of scans carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleTrace {
    scan_numbers: Vec<u32>,
    retention_times: Vec<f64>,
    data_points: Vec<Option<DataPoint>>,
    mz_range: TupleRange<f64>,
    fragment_events: Vec<FragmentEvent>,
}

impl SimpleTrace {
    /// Validates and assembles a trace.
    ///
    /// # Errors
    ///
    /// - the three per-scan arrays differ in length or are empty
    /// - scan numbers are not strictly ascending
    /// - retention times decrease anywhere
    pub fn try_new(
        scan_numbers: Vec<u32>,
        retention_times: Vec<f64>,
        data_points: Vec<Option<DataPoint>>,
        mz_range: TupleRange<f64>,
        fragment_events: Vec<FragmentEvent>,
    ) -> Result<Self> {
        if scan_numbers.is_empty() {
            return Err(DataProcessingError::ExpectedNonEmptyData.into());
        }
        for len in [retention_times.len(), data_points.len()] {
            if len != scan_numbers.len() {
                return Err(DataProcessingError::ExpectedVectorSameLength {
                    real: len,
                    expected: scan_numbers.len(),
                }
                .into());
            }
        }
        if let Some(position) = scan_numbers.windows(2).position(|w| w[0] >= w[1]) {
            return Err(DataProcessingError::ExpectedAscendingScanNumbers {
                position: position + 1,
            }
            .into());
        }
        if let Some(position) = retention_times.windows(2).position(|w| w[0] > w[1]) {
            return Err(DataProcessingError::ExpectedMonotonicRetentionTimes {
                position: position + 1,
            }
            .into());
        }
        Ok(Self {
            scan_numbers,
            retention_times,
            data_points,
            mz_range,
            fragment_events,
        })
    }

    pub fn len(&self) -> usize {
        self.scan_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scan_numbers.is_empty()
    }

    fn index_of(&self, scan_number: u32) -> Option<usize> {
        self.scan_numbers.binary_search(&scan_number).ok()
    }
}

impl ChromatogramSource for SimpleTrace {
    fn scan_numbers(&self) -> &[u32] {
        &self.scan_numbers
    }

    fn data_point_of(&self, scan_number: u32) -> Option<DataPoint> {
        self.data_points[self.index_of(scan_number)?]
    }

    fn retention_time_of(&self, scan_number: u32) -> f64 {
        let index = self
            .index_of(scan_number)
            .unwrap_or_else(|| panic!("scan number {} is not part of this trace", scan_number));
        self.retention_times[index]
    }

    fn mz_range(&self) -> TupleRange<f64> {
        self.mz_range
    }

    fn precursor_charge_of(&self, scan_number: u32) -> i32 {
        self.fragment_events
            .iter()
            .find(|event| event.scan_number == scan_number)
            .map(|event| event.precursor_charge)
            .unwrap_or(0)
    }
}

impl FragmentEventIndex for SimpleTrace {
    fn fragment_events(&self) -> &[FragmentEvent] {
        &self.fragment_events
    }
}
