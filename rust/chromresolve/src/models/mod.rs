pub mod data_point;
pub mod isotope_pattern;
pub mod resolved_peak;
pub mod simple_trace;

pub use data_point::{
    DataPoint,
    FragmentEvent,
};
pub use isotope_pattern::IsotopePattern;
pub use resolved_peak::{
    PeakStatus,
    ResolvedPeak,
    resolve_regions,
};
pub use simple_trace::SimpleTrace;
