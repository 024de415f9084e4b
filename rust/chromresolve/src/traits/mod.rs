pub mod chromatogram_source;
pub mod fragment_search;

pub use chromatogram_source::ChromatogramSource;
pub use fragment_search::{
    DisabledFragmentSearch,
    FragmentEventIndex,
    FragmentScanSearch,
    WindowedFragmentSearch,
};
