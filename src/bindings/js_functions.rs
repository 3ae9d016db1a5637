use crate::wasm_bindgen;

/// # js_functions
///
/// This file lists all JavaScript functions that are callable from Rust as well as
/// the enumerations and identifier types shared with those functions.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // Starts a timer for the number of milliseconds indicated by the `duration`
    // argument.
    //
    // Once this timer has elapsed, and unless `jsClearTimer` has been called since
    // with the `TimerId` returned by this function, the `on_timer_ended` method of
    // the `Dispatcher` will be called with both the corresponding `TimerId` and
    // `reason`.
    pub fn jsTimer(duration: f64, reason: TimerReason) -> TimerId;

    // Clear a timer started with `jsTimer`.
    pub fn jsClearTimer(id: TimerId);

    // Register the playback event listeners (`durationchange`, `seeking`,
    // `timeupdate` and `playing`) on the media element behind
    // `media_element_id`.
    //
    // Each of those events is then relayed to the `Dispatcher` through its
    // `on_playback_event` method until `jsUnobserveMediaElement` is called for
    // the same element.
    //
    // Calling this function twice for the same element without un-observing it
    // in between does nothing the second time.
    pub fn jsObserveMediaElement(media_element_id: MediaElementId);

    // Remove the playback event listeners registered through
    // `jsObserveMediaElement`. Does nothing if the element is not observed.
    pub fn jsUnobserveMediaElement(media_element_id: MediaElementId);

    // Returns the real `currentTime` of the media element, in seconds,
    // bypassing any interception currently installed on it.
    pub fn jsGetMediaPosition(media_element_id: MediaElementId) -> f64;

    // Set the real `currentTime` of the media element, in seconds, bypassing
    // any interception currently installed on it.
    pub fn jsSetMediaPosition(media_element_id: MediaElementId, position: f64);

    // Returns the real `duration` of the media element, in seconds. May be
    // `NaN` when no metadata has been loaded yet.
    pub fn jsGetMediaDuration(media_element_id: MediaElementId) -> f64;

    // Returns the `readyState` of the media element (`0` meaning that no data
    // is available at all).
    pub fn jsGetMediaReadyState(media_element_id: MediaElementId) -> u8;

    // Returns `true` if the media element is currently paused.
    pub fn jsIsMediaPaused(media_element_id: MediaElementId) -> bool;

    // Pause the media element.
    pub fn jsPauseMedia(media_element_id: MediaElementId);

    // Returns `true` if the media element has its `loop` attribute set.
    pub fn jsIsMediaLoop(media_element_id: MediaElementId) -> bool;

    // Returns the current preload mode of the media element.
    pub fn jsGetMediaPreload(media_element_id: MediaElementId) -> PreloadMode;

    // Update the preload mode of the media element.
    pub fn jsSetMediaPreload(media_element_id: MediaElementId, mode: PreloadMode);

    // Get the real time ranges of the given kind (seekable, buffered or
    // played) for the media element, bypassing any interception.
    //
    // The returned vector always has an even length as it is organized by
    // couples of f64: the first of which is the start of a contiguous range in
    // seconds and the second its end.
    pub fn jsGetMediaTimeRanges(media_element_id: MediaElementId, kind: TimeRangeKind) -> Vec<f64>;

    // Install interception of the given time-related property on the media
    // element.
    //
    // The JavaScript side captures the property's currently resolved accessor
    // (walking the element's prototype chain, stopping before the generic
    // media-element base so element-type-specific overrides are respected),
    // keeps it for later restoration, and installs a replacement accessor that
    // calls back into the `Dispatcher`'s virtual accessors.
    //
    // Returns `false` if the element does not expose that property, in which
    // case nothing was installed.
    pub fn jsInterceptMediaProperty(
        media_element_id: MediaElementId,
        property: MediaProperty,
    ) -> bool;

    // Restore the original accessor of a property previously intercepted with
    // `jsInterceptMediaProperty`. Does nothing if the property was not
    // intercepted.
    pub fn jsRestoreMediaProperty(media_element_id: MediaElementId, property: MediaProperty);

    // Dispatch a synthetic event on the media element, so that any UI bound to
    // it reacts exactly as it would to the corresponding native playback
    // event.
    pub fn jsDispatchMediaEvent(media_element_id: MediaElementId, event: SyntheticMediaEvent);
}

/// "Reason" associated to a timer started by the engine.
///
/// This can then help to identify what the timer was for once resolved.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerReason {
    /// The timer is the high-frequency boundary poll armed when playback comes
    /// close to the end of a window.
    BoundaryPoll = 0,
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}

/// Time-related observable properties of a media element that can be
/// intercepted while a window's shim is active.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaProperty {
    CurrentTime = 0,
    Duration = 1,
    Ended = 2,
    Seekable = 3,
    Buffered = 4,
    Played = 5,
}

/// The three interval-set properties a media element exposes.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeRangeKind {
    Seekable = 0,
    Buffered = 1,
    Played = 2,
}

/// Preload mode of a media element, mirroring its `preload` attribute.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadMode {
    None = 0,
    Metadata = 1,
    Auto = 2,
}

/// Synthetic events the engine dispatches on the media element as side
/// effects, so consumers listening for the native events recompute.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntheticMediaEvent {
    DurationChange = 0,
    Progress = 1,
    TimeUpdate = 2,
    Ended = 3,
}

/// Identify a media element on the page monitored by the engine.
pub type MediaElementId = u32;

/// Identify a pending timer.
pub type TimerId = f64;
