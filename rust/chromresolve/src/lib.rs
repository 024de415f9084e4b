//! Summarization of resolved chromatographic peaks.
//!
//! Given a trace (per-scan intensity/m-z samples over retention time) and a
//! contiguous scan region that an upstream boundary resolver identified as
//! one peak, [`ResolvedPeak::resolve`] reduces the region to an immutable
//! summary: median m/z, apex retention time and height, trapezoidal area,
//! coordinate ranges, and the best co-eluting fragmentation scan.
//!
//! The raw-data layer and the fragment-scan search are consumed through the
//! [`ChromatogramSource`] and [`FragmentScanSearch`] seams;
//! [`SimpleTrace`] is a ready-made in-memory implementation of both sides.

// Re-export main structures
pub use crate::models::{
    DataPoint,
    FragmentEvent,
    IsotopePattern,
    PeakStatus,
    ResolvedPeak,
    SimpleTrace,
    resolve_regions,
};

// Re-export traits
pub use crate::traits::{
    ChromatogramSource,
    DisabledFragmentSearch,
    FragmentEventIndex,
    FragmentScanSearch,
    WindowedFragmentSearch,
};
pub use crate::utils::TupleRange;
pub use crate::utils::quantile::{
    median,
    quantile,
};

// Declare modules
pub mod errors;
pub mod models;
pub mod traits;
pub mod utils;

// Re-export errors
pub use crate::errors::{
    ChromresolveError,
    DataProcessingError,
    Result,
};
