use crate::bindings::{
    jsClearTimer, jsDispatchMediaEvent, jsGetMediaDuration, jsGetMediaPosition,
    jsGetMediaPreload, jsGetMediaReadyState, jsGetMediaTimeRanges, jsInterceptMediaProperty,
    jsIsMediaLoop, jsIsMediaPaused, jsObserveMediaElement, jsPauseMedia, jsRestoreMediaProperty,
    jsSetMediaPosition, jsSetMediaPreload, jsTimer, jsUnobserveMediaElement, MediaElementId,
    MediaProperty, PreloadMode, SyntheticMediaEvent, TimeRangeKind, TimerId, TimerReason,
};
use crate::utils::time_ranges::TimeRanges;

/// Read/write surface of one native playable-media element, as seen by the
/// windowing engine.
///
/// All reads go to the real element, bypassing any interception currently
/// installed on it, so the engine always reasons about native values. Callers
/// hold this handle instead of the raw element, which keeps interception and
/// restoration confined to the boundary layer.
///
/// Boundary-poll timers are part of this surface since they come with the same
/// bindings as the element itself.
pub(crate) trait MediaElementHandle {
    /// Start relaying the element's playback events to the engine.
    fn observe_playback(&self);

    /// Stop relaying the element's playback events.
    fn unobserve_playback(&self);

    /// The native `currentTime`, in seconds.
    fn position(&self) -> f64;

    /// Move the native `currentTime`, in seconds.
    fn set_position(&self, position: f64);

    /// The native `duration`, in seconds. `NaN` while no metadata is loaded.
    fn duration(&self) -> f64;

    /// The native `readyState`. `0` means no data is available yet.
    fn ready_state(&self) -> u8;

    fn is_paused(&self) -> bool;

    fn pause(&self);

    /// Whether the element is set to loop at end of media.
    fn is_looping(&self) -> bool;

    fn preload(&self) -> PreloadMode;

    fn set_preload(&self, mode: PreloadMode);

    /// The native interval set of the given kind.
    fn time_ranges(&self, kind: TimeRangeKind) -> TimeRanges;

    /// Install interception of the given property.
    ///
    /// Returns `false` when the element does not expose that property, in
    /// which case interception for it is skipped entirely.
    fn intercept_property(&self, property: MediaProperty) -> bool;

    /// Restore the original accessor of a previously intercepted property.
    fn restore_property(&self, property: MediaProperty);

    /// Dispatch a synthetic event on the element.
    fn dispatch_event(&self, event: SyntheticMediaEvent);

    /// Arm a one-shot boundary poll firing after `delay` milliseconds.
    fn schedule_poll(&self, delay: f64) -> TimerId;

    /// Cancel a boundary poll armed through `schedule_poll`.
    fn clear_poll(&self, id: TimerId);
}

/// `MediaElementHandle` implementation backed by the JavaScript bindings,
/// pointing at the actual media element on the page.
pub(crate) struct JsMediaElement {
    media_element_id: MediaElementId,
}

impl JsMediaElement {
    pub(crate) fn bind(media_element_id: MediaElementId) -> Self {
        Self { media_element_id }
    }
}

impl MediaElementHandle for JsMediaElement {
    fn observe_playback(&self) {
        jsObserveMediaElement(self.media_element_id);
    }

    fn unobserve_playback(&self) {
        jsUnobserveMediaElement(self.media_element_id);
    }

    fn position(&self) -> f64 {
        jsGetMediaPosition(self.media_element_id)
    }

    fn set_position(&self, position: f64) {
        jsSetMediaPosition(self.media_element_id, position);
    }

    fn duration(&self) -> f64 {
        jsGetMediaDuration(self.media_element_id)
    }

    fn ready_state(&self) -> u8 {
        jsGetMediaReadyState(self.media_element_id)
    }

    fn is_paused(&self) -> bool {
        jsIsMediaPaused(self.media_element_id)
    }

    fn pause(&self) {
        jsPauseMedia(self.media_element_id);
    }

    fn is_looping(&self) -> bool {
        jsIsMediaLoop(self.media_element_id)
    }

    fn preload(&self) -> PreloadMode {
        jsGetMediaPreload(self.media_element_id)
    }

    fn set_preload(&self, mode: PreloadMode) {
        jsSetMediaPreload(self.media_element_id, mode);
    }

    fn time_ranges(&self, kind: TimeRangeKind) -> TimeRanges {
        TimeRanges::from_flat_pairs(&jsGetMediaTimeRanges(self.media_element_id, kind))
    }

    fn intercept_property(&self, property: MediaProperty) -> bool {
        jsInterceptMediaProperty(self.media_element_id, property)
    }

    fn restore_property(&self, property: MediaProperty) {
        jsRestoreMediaProperty(self.media_element_id, property);
    }

    fn dispatch_event(&self, event: SyntheticMediaEvent) {
        jsDispatchMediaEvent(self.media_element_id, event);
    }

    fn schedule_poll(&self, delay: f64) -> TimerId {
        jsTimer(delay, TimerReason::BoundaryPoll)
    }

    fn clear_poll(&self, id: TimerId) {
        jsClearTimer(id);
    }
}
