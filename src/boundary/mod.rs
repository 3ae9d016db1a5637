use crate::bindings::{PreloadMode, SyntheticMediaEvent, TimerId};
use crate::media_element::MediaElementHandle;
use crate::time_window::TimeWindow;

/// Distance from the virtual end, in seconds, under which the high-frequency
/// boundary poll is armed. Native `timeupdate` notifications only fire every
/// ~150ms, which is too coarse to stop close to the boundary.
const END_APPROACH_THRESHOLD: f64 = 0.2;

/// Interval of the boundary poll, in milliseconds.
const POLL_INTERVAL: f64 = 10.;

/// Per-session state machine reacting to native playback progress: clamps
/// seeks into the window, detects the virtual end of range and stops or loops
/// there, and polls at high frequency when the playhead comes close to the
/// boundary.
///
/// All comparisons are made on native values read back from the element at the
/// time of the event, never on cached ones. `NaN` window values or a missing
/// native duration make the comparisons fail-false, so clamping and end
/// detection silently disable rather than erroring.
pub(crate) struct BoundaryController {
    /// The currently armed boundary poll. At most one may be live at a time;
    /// it is always canceled before being re-armed.
    pending_poll: Option<TimerId>,
}

impl BoundaryController {
    pub(crate) fn new() -> Self {
        Self { pending_poll: None }
    }

    pub(crate) fn pending_poll(&self) -> Option<TimerId> {
        self.pending_poll
    }

    /// Bring the playhead back into `[0, virtual_duration]` if it escaped.
    ///
    /// Run on `durationchange` and `seeking`, and immediately after the window
    /// itself changes. Does nothing while the element has no data at all.
    pub(crate) fn clamp_to_range(&self, media: &impl MediaElementHandle, window: &TimeWindow) {
        if media.ready_state() == 0 {
            return;
        }
        let virtual_position = window.to_virtual(media.position());
        let virtual_duration = window.virtual_duration(media.duration());
        if virtual_position < 0. {
            clamped_seek(media, window.to_native(0.));
        } else if virtual_position > virtual_duration {
            clamped_seek(media, window.to_native(virtual_duration));
        }
    }

    /// Handler for the native `timeupdate` event.
    pub(crate) fn on_time_update(
        &mut self,
        media: &impl MediaElementHandle,
        window: &TimeWindow,
    ) {
        if let Some(id) = self.pending_poll.take() {
            media.clear_poll(id);
        }
        self.check_boundary(media, window);
    }

    /// Handler for the native `playing` event: restart from the window start
    /// when playback resumes after a virtual end of range.
    pub(crate) fn on_playing(&self, media: &impl MediaElementHandle, window: &TimeWindow) {
        let virtual_position = window.to_virtual(media.position());
        if virtual_position >= window.virtual_duration(media.duration()) {
            media.set_position(window.to_native(0.));
        }
    }

    /// Handler for an elapsed boundary poll.
    pub(crate) fn on_poll(&mut self, media: &impl MediaElementHandle, window: &TimeWindow) {
        self.pending_poll = None;
        self.check_boundary(media, window);
    }

    /// Cancel the pending boundary poll, if any.
    pub(crate) fn cancel_poll(&mut self, media: &impl MediaElementHandle) {
        if let Some(id) = self.pending_poll.take() {
            media.clear_poll(id);
        }
    }

    fn check_boundary(&mut self, media: &impl MediaElementHandle, window: &TimeWindow) {
        let virtual_position = window.to_virtual(media.position());

        // The native clock may start before the virtual window does.
        if window.start > 0. && virtual_position < 0. {
            media.set_position(window.to_native(0.));
            return;
        }

        // Unbounded windows have no end-of-range behavior of their own; the
        // native end applies.
        if window.end.is_none() {
            return;
        }

        let virtual_duration = window.virtual_duration(media.duration());
        if virtual_position >= virtual_duration {
            if media.is_looping() {
                media.set_position(window.to_native(0.));
            } else {
                media.pause();
                media.dispatch_event(SyntheticMediaEvent::Ended);
            }
            return;
        }

        if virtual_position + END_APPROACH_THRESHOLD > virtual_duration && !media.is_paused() {
            self.pending_poll = Some(media.schedule_poll(POLL_INTERVAL));
        }
    }
}

/// Seek to `native_position`, toggling the preload mode off and back to "auto"
/// around the seek when it was "auto".
///
/// Some native engines fail to emit timing events after a seek unless preload
/// goes through this toggle; other preload modes are left untouched.
fn clamped_seek(media: &impl MediaElementHandle, native_position: f64) {
    if media.preload() == PreloadMode::Auto {
        media.set_preload(PreloadMode::None);
        media.set_position(native_position);
        media.set_preload(PreloadMode::Auto);
    } else {
        media.set_position(native_position);
    }
}
