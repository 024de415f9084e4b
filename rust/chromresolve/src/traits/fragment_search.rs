use tracing::debug;

use crate::models::FragmentEvent;
use crate::utils::TupleRange;

/// Strategy for locating the best co-eluting fragmentation scan of a peak.
///
/// Kept as a trait so alternative matching heuristics can be swapped in
/// without touching the summarizer.
pub trait FragmentScanSearch {
    /// The fragmentation scan whose retention time falls in `rt_range` and
    /// whose precursor m/z falls in `mz_range`, or `None` when no event
    /// qualifies.
    fn best_fragment_in(
        &self,
        rt_range: TupleRange<f64>,
        mz_range: TupleRange<f64>,
    ) -> Option<u32>;
}

/// Access to the fragmentation events of a trace, in scan order.
pub trait FragmentEventIndex {
    fn fragment_events(&self) -> &[FragmentEvent];
}

/// Default search strategy: of all fragmentation events inside the
/// rt/precursor-m/z window, keep the one with the highest total ion
/// current. Strict comparison, so ties keep the earliest event.
pub struct WindowedFragmentSearch<'a, S: FragmentEventIndex> {
    index: &'a S,
}

impl<'a, S: FragmentEventIndex> WindowedFragmentSearch<'a, S> {
    pub fn new(index: &'a S) -> Self {
        Self { index }
    }
}

impl<S: FragmentEventIndex> FragmentScanSearch for WindowedFragmentSearch<'_, S> {
    fn best_fragment_in(
        &self,
        rt_range: TupleRange<f64>,
        mz_range: TupleRange<f64>,
    ) -> Option<u32> {
        let mut best: Option<&FragmentEvent> = None;
        for event in self.index.fragment_events() {
            if !rt_range.contains(event.rt) || !mz_range.contains(event.precursor_mz) {
                continue;
            }
            match best {
                Some(current) if event.total_ion_current <= current.total_ion_current => {}
                _ => best = Some(event),
            }
        }
        if let Some(event) = best {
            debug!(
                "best fragment scan {} (tic {:.1}) in rt {:?} mz {:?}",
                event.scan_number,
                event.total_ion_current,
                rt_range.as_tuple(),
                mz_range.as_tuple()
            );
        }
        best.map(|event| event.scan_number)
    }
}

/// A search that never finds anything, for MS1-only data.
pub struct DisabledFragmentSearch;

impl FragmentScanSearch for DisabledFragmentSearch {
    fn best_fragment_in(&self, _: TupleRange<f64>, _: TupleRange<f64>) -> Option<u32> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Events(Vec<FragmentEvent>);

    impl FragmentEventIndex for Events {
        fn fragment_events(&self) -> &[FragmentEvent] {
            &self.0
        }
    }

    fn event(scan_number: u32, rt: f64, precursor_mz: f64, tic: f64) -> FragmentEvent {
        FragmentEvent {
            scan_number,
            rt,
            precursor_mz,
            precursor_charge: 0,
            total_ion_current: tic,
        }
    }

    #[test]
    fn test_windowed_search_picks_highest_tic() {
        let events = Events(vec![
            event(10, 1.0, 100.0, 500.0),
            event(11, 1.5, 100.1, 900.0),
            event(12, 2.0, 100.2, 700.0),
        ]);
        let search = WindowedFragmentSearch::new(&events);
        let best = search.best_fragment_in(
            TupleRange::try_new(0.5, 2.5).unwrap(),
            TupleRange::try_new(99.0, 101.0).unwrap(),
        );
        assert_eq!(best, Some(11));
    }

    #[test]
    fn test_windowed_search_ties_keep_earliest() {
        let events = Events(vec![event(10, 1.0, 100.0, 900.0), event(11, 1.5, 100.1, 900.0)]);
        let search = WindowedFragmentSearch::new(&events);
        let best = search.best_fragment_in(
            TupleRange::try_new(0.5, 2.5).unwrap(),
            TupleRange::try_new(99.0, 101.0).unwrap(),
        );
        assert_eq!(best, Some(10));
    }

    #[test]
    fn test_windowed_search_filters_both_windows() {
        let events = Events(vec![
            event(10, 5.0, 100.0, 900.0),  // rt outside
            event(11, 1.0, 200.0, 900.0),  // mz outside
        ]);
        let search = WindowedFragmentSearch::new(&events);
        let best = search.best_fragment_in(
            TupleRange::try_new(0.5, 2.5).unwrap(),
            TupleRange::try_new(99.0, 101.0).unwrap(),
        );
        assert_eq!(best, None);
    }
}
