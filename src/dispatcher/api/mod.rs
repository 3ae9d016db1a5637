use crate::{
    bindings::{MediaElementId, TimeRangeKind},
    media_element::JsMediaElement,
    session::registry::SessionRegistry,
    time_window::TimeWindow,
    wasm_bindgen, Logger,
};

use super::Dispatcher;

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. There's
/// also "event_listeners" which, as their name points at, should be called
/// when particular events happen. Such "event_listeners" are defined in their
/// own file.
#[wasm_bindgen]
impl Dispatcher {
    /// Create a new `Dispatcher` with no monitored media element.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Dispatcher {
            sessions: SessionRegistry::new(),
        }
    }

    /// Open a window session over the media element behind
    /// `media_element_id`, constraining playback to `[start, end)` of its real
    /// timeline (`end` omitted means the window extends to the native end).
    ///
    /// If a session already monitors that element, its window is updated in
    /// place instead: no second listener set is registered and no property is
    /// patched twice.
    pub fn open_session(&mut self, media_element_id: MediaElementId, start: f64, end: Option<f64>) {
        Logger::info(&format!(
            "API: opening session for element {} ({} to {:?})",
            media_element_id, start, end
        ));
        self.sessions.open(
            media_element_id,
            JsMediaElement::bind(media_element_id),
            TimeWindow::new(start, end),
        );
    }

    /// Open or update a session from the raw declarative attribute value
    /// (whitespace-separated `"<start> [<end>]"`, empty meaning the default
    /// window).
    ///
    /// Returns `false` without touching any session when the value does not
    /// parse.
    pub fn apply_window_attribute(
        &mut self,
        media_element_id: MediaElementId,
        value: &str,
    ) -> bool {
        match TimeWindow::from_attribute(value) {
            Ok(window) => {
                self.open_session(media_element_id, window.start, window.end);
                true
            }
            Err(err) => {
                Logger::warn(&format!(
                    "API: ignoring window declaration for element {}: {}",
                    media_element_id, err
                ));
                false
            }
        }
    }

    /// Update the window start of the session monitoring the element. The
    /// playhead is re-clamped immediately.
    pub fn set_window_start(&mut self, media_element_id: MediaElementId, start: f64) {
        match self.sessions.session_mut(media_element_id) {
            Some(session) => session.set_start(start),
            None => warn_unmonitored(media_element_id),
        }
    }

    /// Update the window end of the session monitoring the element. The
    /// playhead is re-clamped immediately.
    pub fn set_window_end(&mut self, media_element_id: MediaElementId, end: Option<f64>) {
        match self.sessions.session_mut(media_element_id) {
            Some(session) => session.set_end(end),
            None => warn_unmonitored(media_element_id),
        }
    }

    /// Enable or disable full property interception on the element, so that
    /// external readers of its time-related properties observe the virtual
    /// timeline. Idempotent in both directions.
    pub fn set_shim(&mut self, media_element_id: MediaElementId, enabled: bool) {
        match self.sessions.session_mut(media_element_id) {
            Some(session) => session.set_shim(enabled),
            None => warn_unmonitored(media_element_id),
        }
    }

    /// Destroy the session monitoring the element, restoring native behavior
    /// exactly. Returns `false` if no session monitored it; calling this twice
    /// is a no-op the second time.
    pub fn close_session(&mut self, media_element_id: MediaElementId) -> bool {
        Logger::info(&format!(
            "API: closing session for element {}",
            media_element_id
        ));
        self.sessions.close(media_element_id)
    }

    /// Destroy every session.
    pub fn close_all_sessions(&mut self) {
        self.sessions.close_all();
    }

    pub fn has_session(&self, media_element_id: MediaElementId) -> bool {
        self.sessions.contains(media_element_id)
    }

    /// Current position on the element's virtual timeline, backing the
    /// intercepted `currentTime` getter. `None` when the element is not
    /// monitored.
    pub fn virtual_position(&self, media_element_id: MediaElementId) -> Option<f64> {
        self.sessions
            .session(media_element_id)
            .map(|s| s.virtual_position())
    }

    /// Seek on the element's virtual timeline, backing the intercepted
    /// `currentTime` setter.
    pub fn set_virtual_position(&self, media_element_id: MediaElementId, position: f64) {
        match self.sessions.session(media_element_id) {
            Some(session) => session.set_virtual_position(position),
            None => warn_unmonitored(media_element_id),
        }
    }

    /// Duration of the element's virtual timeline, backing the intercepted
    /// `duration` getter. `None` when the element is not monitored.
    pub fn virtual_duration(&self, media_element_id: MediaElementId) -> Option<f64> {
        self.sessions
            .session(media_element_id)
            .map(|s| s.virtual_duration())
    }

    /// Whether playback reached the virtual end of range, backing the
    /// intercepted `ended` getter. `None` when the element is not monitored.
    pub fn is_virtually_ended(&self, media_element_id: MediaElementId) -> Option<bool> {
        self.sessions
            .session(media_element_id)
            .map(|s| s.is_virtually_ended())
    }

    /// The element's interval set of the given kind mapped into the virtual
    /// timeline, backing the intercepted `seekable`/`buffered`/`played`
    /// getters. Flat `[start1, end1...]` representation; empty when the
    /// element is not monitored.
    pub fn virtual_time_ranges(
        &self,
        media_element_id: MediaElementId,
        kind: TimeRangeKind,
    ) -> Vec<f64> {
        self.sessions
            .session(media_element_id)
            .map(|s| s.virtual_time_ranges(kind).to_flat_pairs())
            .unwrap_or_default()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_unmonitored(media_element_id: MediaElementId) {
    Logger::warn(&format!(
        "API: element {} is not monitored, ignoring call",
        media_element_id
    ));
}
