use rayon::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::models::{
    DataPoint,
    IsotopePattern,
};
use crate::traits::{
    ChromatogramSource,
    FragmentScanSearch,
};
use crate::utils::TupleRange;
use crate::utils::quantile::median;

/// How a peak came to be. Peaks built by the summarizer are always
/// `Detected`; the other variants exist for peaks imported from manual or
/// gap-filling workflows downstream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeakStatus {
    #[default]
    Detected,
    Estimated,
    Manual,
    Unknown,
}

/// The immutable summary of one chromatographic peak.
///
/// Built once from a trace region by [`ResolvedPeak::resolve`]; read-only
/// afterwards except for the two deisotoping annotations
/// ([`set_isotope_pattern`](Self::set_isotope_pattern) and
/// [`set_charge`](Self::set_charge)).
///
/// Per-sample values are kept as parallel primitive arrays rather than one
/// struct per sample, so that millions of peaks can coexist in memory. The
/// arrays are defensive copies: the source trace can be mutated or dropped
/// after construction without affecting the peak.
///
/// The two annotation mutators are not synchronized. Callers running a
/// concurrent deisotoping step over the same peak must serialize access
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPeak {
    scan_numbers: Vec<u32>,
    // Index-aligned with scan_numbers. A missing sample keeps (0.0, 0.0),
    // which deliberately still participates in the median and the area
    // below (only range accumulation skips it).
    mz_values: Vec<f64>,
    intensity_values: Vec<f64>,
    mz: f64,
    rt: f64,
    height: f64,
    area: f64,
    representative_scan: u32,
    fragment_scan: Option<u32>,
    mz_range: TupleRange<f64>,
    rt_range: Option<TupleRange<f64>>,
    intensity_range: Option<TupleRange<f64>>,
    charge: i32,
    isotope_pattern: Option<IsotopePattern>,
}

impl ResolvedPeak {
    /// Summarizes the inclusive region `[region_start, region_end]` of a
    /// trace into a peak.
    ///
    /// Single pass over the region: copy each sample into the parallel
    /// arrays, accumulate the rt/intensity ranges over non-missing samples,
    /// and track the apex (strict-greater comparison, so the earliest
    /// maximum wins). Then the median m/z over the full region, the
    /// trapezoidal area over every consecutive sample pair, and one lookup
    /// against `fragment_search` for the best co-eluting fragmentation
    /// scan. A positive precursor charge on that scan is adopted as the
    /// peak's charge.
    ///
    /// A region made up entirely of missing samples still resolves: height
    /// stays at its never-updated sentinel (`f64::NEG_INFINITY`), rt and
    /// the representative scan stay 0, and both accumulated ranges are
    /// `None`, which downstream consumers must read as "no data".
    ///
    /// # Panics
    ///
    /// Inverted bounds or a region outside the trace's scan sequence are
    /// contract violations of the upstream boundary resolver and panic.
    pub fn resolve<S, F>(
        trace: &S,
        fragment_search: &F,
        region_start: usize,
        region_end: usize,
    ) -> Self
    where
        S: ChromatogramSource,
        F: FragmentScanSearch,
    {
        let all_scans = trace.scan_numbers();
        assert!(
            region_start <= region_end,
            "inverted peak region: [{}, {}]",
            region_start,
            region_end
        );
        assert!(
            region_end < all_scans.len(),
            "peak region [{}, {}] outside trace of {} scans",
            region_start,
            region_end,
            all_scans.len()
        );

        let scan_numbers: Vec<u32> = all_scans[region_start..=region_end].to_vec();
        let n = scan_numbers.len();

        // The trace's own m/z width is kept verbatim instead of being
        // recomputed from the samples: in continuous raw data each m/z peak
        // has an instrumental width, and the width of the detected point
        // values alone would be narrower.
        let mz_range = trace.mz_range();

        let mut mz_values = vec![0.0; n];
        let mut intensity_values = vec![0.0; n];
        let mut retention_times = vec![0.0; n];
        let mut height = f64::NEG_INFINITY;
        let mut rt = 0.0;
        let mut representative_scan = 0u32;
        let mut rt_range: Option<TupleRange<f64>> = None;
        let mut intensity_range: Option<TupleRange<f64>> = None;

        for (i, &scan) in scan_numbers.iter().enumerate() {
            retention_times[i] = trace.retention_time_of(scan);

            let Some(dp) = trace.data_point_of(scan) else {
                continue;
            };
            mz_values[i] = dp.mz;
            intensity_values[i] = dp.intensity;

            match (&mut rt_range, &mut intensity_range) {
                (Some(rtr), Some(ir)) => {
                    rtr.extend(retention_times[i]);
                    ir.extend(dp.intensity);
                }
                _ => {
                    rt_range = Some(TupleRange::singleton(retention_times[i]));
                    intensity_range = Some(TupleRange::singleton(dp.intensity));
                }
            }

            if height < dp.intensity {
                height = dp.intensity;
                rt = retention_times[i];
                representative_scan = scan;
            }
        }

        if rt_range.is_none() {
            warn!(
                "region [{}, {}] resolved with no recorded data points",
                region_start, region_end
            );
        }

        // Median over the full region, zero-filled slots included.
        let mz = median(&mz_values).expect("region is non-empty by construction");

        // Trapezoid slices over every consecutive pair, including pairs
        // that touch a zero-filled slot.
        let mut area = 0.0;
        for i in 1..n {
            area += (retention_times[i] - retention_times[i - 1])
                * (intensity_values[i] + intensity_values[i - 1])
                / 2.0;
        }

        let mut fragment_scan = None;
        let mut charge = 0;
        if let Some(rtr) = rt_range {
            fragment_scan = fragment_search.best_fragment_in(rtr, mz_range);
            if let Some(scan) = fragment_scan {
                debug!("peak at rt {:.3} linked to fragment scan {}", rt, scan);
                let precursor_charge = trace.precursor_charge_of(scan);
                if precursor_charge > 0 {
                    charge = precursor_charge;
                }
            }
        }

        Self {
            scan_numbers,
            mz_values,
            intensity_values,
            mz,
            rt,
            height,
            area,
            representative_scan,
            fragment_scan,
            mz_range,
            rt_range,
            intensity_range,
            charge,
            isotope_pattern: None,
        }
    }

    /// The stored point for a scan of this peak, or `None` for a scan
    /// outside the region. O(log n) over the ascending scan sequence.
    pub fn data_point_of(&self, scan_number: u32) -> Option<DataPoint> {
        let index = self.scan_numbers.binary_search(&scan_number).ok()?;
        Some(DataPoint::new(
            self.mz_values[index],
            self.intensity_values[index],
        ))
    }

    pub fn scan_numbers(&self) -> &[u32] {
        &self.scan_numbers
    }

    pub fn mz_values(&self) -> &[f64] {
        &self.mz_values
    }

    pub fn intensity_values(&self) -> &[f64] {
        &self.intensity_values
    }

    /// Number of samples in the region, missing ones included.
    pub fn len(&self) -> usize {
        self.scan_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scan_numbers.is_empty()
    }

    /// Median m/z over the whole region (zero-filled gaps included).
    pub fn mz(&self) -> f64 {
        self.mz
    }

    /// Retention time of the apex sample.
    pub fn rt(&self) -> f64 {
        self.rt
    }

    /// Intensity of the apex sample.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Trapezoidal integral of intensity over retention time.
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn representative_scan(&self) -> u32 {
        self.representative_scan
    }

    pub fn fragment_scan(&self) -> Option<u32> {
        self.fragment_scan
    }

    pub fn mz_range(&self) -> TupleRange<f64> {
        self.mz_range
    }

    /// Retention-time spread of the non-missing samples, `None` when the
    /// whole region was missing.
    pub fn rt_range(&self) -> Option<TupleRange<f64>> {
        self.rt_range
    }

    /// Intensity spread of the non-missing samples, `None` when the whole
    /// region was missing.
    pub fn intensity_range(&self) -> Option<TupleRange<f64>> {
        self.intensity_range
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn isotope_pattern(&self) -> Option<&IsotopePattern> {
        self.isotope_pattern.as_ref()
    }

    pub fn status(&self) -> PeakStatus {
        PeakStatus::Detected
    }

    /// Deisotoping annotation. No validation, caller's responsibility.
    pub fn set_isotope_pattern(&mut self, pattern: IsotopePattern) {
        self.isotope_pattern = Some(pattern);
    }

    /// Deisotoping annotation. No validation, caller's responsibility.
    pub fn set_charge(&mut self, charge: i32) {
        self.charge = charge;
    }
}

impl std::fmt::Display for ResolvedPeak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "m/z {:.4} @ {:.2} (height {:.1}, area {:.1}, {} scans)",
            self.mz,
            self.rt,
            self.height,
            self.area,
            self.len()
        )
    }
}

/// Resolves many regions of one read-only trace in parallel.
///
/// Each peak is built independently and owns its own buffers, so sharing
/// the trace across rayon workers needs no locking.
#[tracing::instrument(skip_all, level = "trace")]
pub fn resolve_regions<S, F>(
    trace: &S,
    fragment_search: &F,
    regions: &[(usize, usize)],
) -> Vec<ResolvedPeak>
where
    S: ChromatogramSource + Sync,
    F: FragmentScanSearch + Sync,
{
    regions
        .par_iter()
        .map(|&(start, end)| ResolvedPeak::resolve(trace, fragment_search, start, end))
        .collect()
}
