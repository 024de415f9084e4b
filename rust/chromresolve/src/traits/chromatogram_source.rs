use crate::models::DataPoint;
use crate::utils::TupleRange;

/// Read-only view over one chromatographic trace.
///
/// This is the seam between the summarizer and the raw-data storage layer.
/// Implementations must keep `scan_numbers` strictly ascending and unique
/// (the ids need not be contiguous) and retention times non-decreasing
/// across the trace.
///
/// A missing sample (a scan id with no recorded point) is an expected
/// condition, not an error: `data_point_of` reports it as `None` and the
/// summarizer zero-fills the slot.
pub trait ChromatogramSource {
    /// The MS1 scan ids that make up this trace, in ascending order.
    fn scan_numbers(&self) -> &[u32];

    /// The recorded point for a scan, or `None` when the trace has no data
    /// there.
    fn data_point_of(&self, scan_number: u32) -> Option<DataPoint>;

    /// Retention time of a scan.
    ///
    /// # Panics
    ///
    /// Asking for a scan id that is not part of the trace is a contract
    /// violation and panics.
    fn retention_time_of(&self, scan_number: u32) -> f64;

    /// The m/z width of the whole trace.
    ///
    /// This is the trace's own declared width, which accounts for
    /// instrumental peak broadening. It is wider than what the point
    /// samples alone would suggest and is never recomputed from them.
    fn mz_range(&self) -> TupleRange<f64>;

    /// Precursor charge recorded on a fragmentation scan, 0 if unknown or
    /// if the scan carries no fragmentation event.
    fn precursor_charge_of(&self, scan_number: u32) -> i32;
}
