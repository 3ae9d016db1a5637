use std::slice::Iter;

/// Represent a range of time, from a start to an end, generally in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TimeRange {
    start: f64,
    end: f64,
}

impl TimeRange {
    /// Returns the start time of the range
    pub(crate) fn start(&self) -> f64 {
        self.start
    }
    /// Returns the end time of the range
    pub(crate) fn end(&self) -> f64 {
        self.end
    }
}

/// Abstracts non-contiguous chronological ranges of time, generally expressed in seconds.
///
/// Mirrors the native representation of a media element's `seekable`,
/// `buffered` and `played` attributes: ranges are kept ordered and disjoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct TimeRanges {
    ranges: Vec<TimeRange>,
}

impl TimeRanges {
    /// Create a new empty `TimeRanges` object
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a range of time to that `TimeRanges` object, merging it with the
    /// ranges that are already there.
    pub(crate) fn add(&mut self, start: f64, end: f64) {
        let insertion_idx = self
            .ranges
            .iter()
            .position(|r| r.end >= start)
            .unwrap_or(self.ranges.len());

        let mut merged = TimeRange { start, end };
        let mut removed = 0;
        for range in self.ranges.iter().skip(insertion_idx) {
            if range.start > merged.end {
                break;
            }
            merged.start = merged.start.min(range.start);
            merged.end = merged.end.max(range.end);
            removed += 1;
        }
        self.ranges
            .splice(insertion_idx..insertion_idx + removed, [merged]);
    }

    /// Build a `TimeRanges` object from the flat `[start1, end1, start2, end2...]`
    /// representation used by the JavaScript bindings.
    ///
    /// A trailing odd value, which would break the native contract, is ignored.
    pub(crate) fn from_flat_pairs(values: &[f64]) -> Self {
        let mut ranges = Vec::with_capacity(values.len() / 2);
        for pair in values.chunks_exact(2) {
            ranges.push(TimeRange {
                start: pair[0],
                end: pair[1],
            });
        }
        Self { ranges }
    }

    /// Flatten this `TimeRanges` object back into the `[start1, end1...]`
    /// representation used by the JavaScript bindings.
    pub(crate) fn to_flat_pairs(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.ranges.len() * 2);
        for range in &self.ranges {
            flat.push(range.start);
            flat.push(range.end);
        }
        flat
    }

    /// Returns the number of non-contiguous ranges in this `TimeRanges` object
    pub(crate) fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns the starting time of the range whose index is given in argument.
    ///
    /// Returns `None` if the given index is superior or equal to the number of actual ranges.
    pub(crate) fn start(&self, idx: usize) -> Option<f64> {
        self.ranges.get(idx).map(|r| r.start)
    }

    /// Returns the ending time of the range whose index is given in argument.
    ///
    /// Returns `None` if the given index is superior or equal to the number of actual ranges.
    pub(crate) fn end(&self, idx: usize) -> Option<f64> {
        self.ranges.get(idx).map(|r| r.end)
    }

    /// Map those native ranges into the virtual timeline of a window beginning
    /// `start` seconds into the real timeline and lasting `duration` seconds.
    ///
    /// Each range is offset by `start` then clamped into `[0, duration]`, so
    /// no resulting range is negative-length, extends below `0` or above
    /// `duration`. An empty native set normalizes to the single `[0, 0]`
    /// range, which is how a media element represents "no data"; zero-length
    /// clamped ranges are kept as-is.
    ///
    /// Native values mutate with real time while buffering, so this is
    /// recomputed on every property read rather than cached.
    pub(crate) fn virtualized(&self, start: f64, duration: f64) -> TimeRanges {
        if self.ranges.is_empty() {
            return TimeRanges {
                ranges: vec![TimeRange { start: 0., end: 0. }],
            };
        }
        let ranges = self
            .ranges
            .iter()
            .map(|r| TimeRange {
                start: (r.start - start).max(0.).min(duration),
                end: (r.end - start).max(0.).min(duration),
            })
            .collect();
        TimeRanges { ranges }
    }
}

impl<'a> IntoIterator for &'a TimeRanges {
    type Item = &'a TimeRange;
    type IntoIter = Iter<'a, TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
