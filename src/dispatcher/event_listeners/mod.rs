use crate::{
    bindings::{MediaElementId, TimerId, TimerReason},
    wasm_bindgen,
};

use super::Dispatcher;

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl Dispatcher {
    /// The JS code should call this method each time one of the observed
    /// playback events fires on a media element monitored through
    /// `open_session`.
    ///
    /// # Arguments
    ///
    /// * `media_element_id` - The identifier given to `open_session`, allowing
    ///   the `Dispatcher` to find the session monitoring that element.
    ///
    /// * `event` - Which of the four observed native events fired.
    pub fn on_playback_event(&mut self, media_element_id: MediaElementId, event: PlaybackEvent) {
        self.sessions.on_playback_event(media_element_id, event);
    }

    /// The JS code should call this method each time a timer started with the
    /// `jsTimer` function finished.
    ///
    /// # Arguments
    ///
    /// * `id` - The `TimerId` given by `jsTimer` when the timer was started.
    ///
    /// * `reason` - The `TimerReason` given by the Rust code when that timer
    ///   was started, allowing to discriminate between timers used for
    ///   different purposes.
    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        match reason {
            TimerReason::BoundaryPoll => self.sessions.on_poll_timer(id),
        }
    }
}

/// Native playback event relayed to the session monitoring the element.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The HTMLMediaElement's "durationchange" event has just been triggered
    DurationChange = 0,
    /// The HTMLMediaElement's "seeking" event has just been triggered
    Seeking = 1,
    /// The HTMLMediaElement's "timeupdate" event has just been triggered
    TimeUpdate = 2,
    /// The HTMLMediaElement's "playing" event has just been triggered
    Playing = 3,
}
