use thiserror::Error;

/// Playback window declared over the real timeline of a media element.
///
/// `start` is the offset, in seconds, at which the virtual timeline begins.
/// `end` is where it stops; `None` means the window is unbounded and extends
/// to the native end of the media.
///
/// `end > start` is expected but not enforced: degenerate values (including
/// `NaN`) make the boundary comparisons fail-false downstream, silently
/// disabling clamping for that dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct TimeWindow {
    pub(crate) start: f64,
    pub(crate) end: Option<f64>,
}

impl TimeWindow {
    pub(crate) fn new(start: f64, end: Option<f64>) -> Self {
        Self { start, end }
    }

    /// Convert a native media position to its position on the virtual
    /// timeline.
    pub(crate) fn to_virtual(&self, native_position: f64) -> f64 {
        native_position - self.start
    }

    /// Convert a position on the virtual timeline to the corresponding native
    /// media position.
    pub(crate) fn to_native(&self, virtual_position: f64) -> f64 {
        virtual_position + self.start
    }

    /// Duration of the virtual timeline.
    ///
    /// When a positive `end` is declared the window itself bounds the
    /// duration, else the native duration does. `native_duration` may be `NaN`
    /// when the media has no metadata yet, in which case the result is `NaN`
    /// too.
    pub(crate) fn virtual_duration(&self, native_duration: f64) -> f64 {
        match self.end {
            Some(end) if end > 0. => end - self.start,
            _ => native_duration - self.start,
        }
    }

    /// Parse the declarative window attribute value.
    ///
    /// An empty (or whitespace-only) value declares the default window
    /// `{start: 0, end: None}`. Otherwise the value is whitespace-separated
    /// `"<start> [<end>]"` seconds; tokens past the second are ignored.
    ///
    /// Non-numeric parts are rejected here, at the declarative boundary,
    /// rather than being propagated as `NaN` into the engine.
    pub(crate) fn from_attribute(value: &str) -> Result<Self, WindowAttributeError> {
        let mut parts = value.split_whitespace();
        let Some(start_str) = parts.next() else {
            return Ok(Self::default());
        };
        let start = start_str
            .parse::<f64>()
            .map_err(|_| WindowAttributeError::InvalidStart {
                value: start_str.to_string(),
            })?;
        let end = match parts.next() {
            None => None,
            Some(end_str) => Some(end_str.parse::<f64>().map_err(|_| {
                WindowAttributeError::InvalidEnd {
                    value: end_str.to_string(),
                }
            })?),
        };
        Ok(Self { start, end })
    }
}

/// Error that may be returned when parsing a declarative window attribute.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum WindowAttributeError {
    #[error("invalid start value `{value}` in window attribute")]
    InvalidStart { value: String },
    #[error("invalid end value `{value}` in window attribute")]
    InvalidEnd { value: String },
}
