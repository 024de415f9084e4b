use serde::{
    Deserialize,
    Serialize,
};

/// A single recorded point of a trace: one m/z and one intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub mz: f64,
    pub intensity: f64,
}

impl DataPoint {
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }
}

/// Metadata of one fragmentation event in a trace.
///
/// This is what the windowed fragment search ranks when looking for the
/// best co-eluting fragmentation scan of a peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragmentEvent {
    pub scan_number: u32,
    pub rt: f64,
    pub precursor_mz: f64,
    /// 0 means the instrument did not report a charge.
    pub precursor_charge: i32,
    pub total_ion_current: f64,
}
