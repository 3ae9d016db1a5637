use crate::bindings::{TimeRangeKind, TimerId};
use crate::boundary::BoundaryController;
use crate::dispatcher::PlaybackEvent;
use crate::media_element::MediaElementHandle;
use crate::time_window::TimeWindow;
use crate::timeline::TimelineProxy;
use crate::utils::time_ranges::TimeRanges;

pub(crate) mod registry;

/// Per-element lifecycle object composing the boundary state machine and the
/// optional timeline interception over one media element.
///
/// Opening a session starts playback observation on the element; destroying it
/// unwires everything and restores native behavior exactly. Boundary control
/// always runs while the session lives, interception only while `shim` is set.
pub(crate) struct WindowSession<M: MediaElementHandle> {
    media: M,
    window: TimeWindow,
    boundary: BoundaryController,
    proxy: TimelineProxy,
    destroyed: bool,
}

impl<M: MediaElementHandle> WindowSession<M> {
    /// Open a session over `media` with the given initial window.
    ///
    /// The playhead is clamped right away so a window declared mid-playback
    /// takes effect without waiting for a native event.
    pub(crate) fn open(media: M, window: TimeWindow) -> Self {
        media.observe_playback();
        let session = Self {
            media,
            window,
            boundary: BoundaryController::new(),
            proxy: TimelineProxy::new(),
            destroyed: false,
        };
        session.boundary.clamp_to_range(&session.media, &session.window);
        session
    }

    pub(crate) fn window(&self) -> TimeWindow {
        self.window
    }

    /// Update the window start and re-clamp immediately.
    pub(crate) fn set_start(&mut self, start: f64) {
        self.window.start = start;
        self.boundary.clamp_to_range(&self.media, &self.window);
    }

    /// Update the window end and re-clamp immediately.
    pub(crate) fn set_end(&mut self, end: Option<f64>) {
        self.window.end = end;
        self.boundary.clamp_to_range(&self.media, &self.window);
    }

    /// Enable or disable the full property interception. Both directions are
    /// idempotent.
    pub(crate) fn set_shim(&mut self, enabled: bool) {
        if enabled {
            self.proxy.activate(&self.media, &self.window);
        } else {
            self.proxy.deactivate(&self.media);
        }
    }

    pub(crate) fn is_shim_active(&self) -> bool {
        self.proxy.is_active()
    }

    /// Route a relayed native playback event to the boundary controller.
    pub(crate) fn handle_event(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::DurationChange | PlaybackEvent::Seeking => {
                self.boundary.clamp_to_range(&self.media, &self.window)
            }
            PlaybackEvent::TimeUpdate => self.boundary.on_time_update(&self.media, &self.window),
            PlaybackEvent::Playing => self.boundary.on_playing(&self.media, &self.window),
        }
    }

    pub(crate) fn pending_poll(&self) -> Option<TimerId> {
        self.boundary.pending_poll()
    }

    /// Run the boundary check after the armed poll elapsed.
    pub(crate) fn on_poll(&mut self) {
        self.boundary.on_poll(&self.media, &self.window);
    }

    /// Unwire the session: cancel any pending poll, remove the interception if
    /// it was active and stop playback observation. Calling this a second time
    /// does nothing.
    pub(crate) fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.boundary.cancel_poll(&self.media);
        self.proxy.deactivate(&self.media);
        self.media.unobserve_playback();
    }

    /// Current position on the virtual timeline.
    pub(crate) fn virtual_position(&self) -> f64 {
        self.window.to_virtual(self.media.position())
    }

    /// Seek to a position on the virtual timeline.
    pub(crate) fn set_virtual_position(&self, position: f64) {
        self.media.set_position(self.window.to_native(position));
    }

    /// Duration of the virtual timeline.
    pub(crate) fn virtual_duration(&self) -> f64 {
        self.window.virtual_duration(self.media.duration())
    }

    /// Whether playback reached the virtual end of range.
    pub(crate) fn is_virtually_ended(&self) -> bool {
        self.virtual_position() >= self.virtual_duration()
    }

    /// The element's interval set of the given kind, mapped into the virtual
    /// timeline. Recomputed on every call.
    pub(crate) fn virtual_time_ranges(&self, kind: TimeRangeKind) -> TimeRanges {
        self.media
            .time_ranges(kind)
            .virtualized(self.window.start, self.virtual_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_element::fake::FakeMediaElement;

    #[test]
    fn test_virtual_position_round_trip() {
        let media = FakeMediaElement::with_media(0., 110.);
        let session = WindowSession::open(media.clone(), TimeWindow::new(10., None));

        session.set_virtual_position(5.);
        assert_eq!(media.state().position, 15.);
        assert_eq!(session.virtual_position(), 5.);

        session.set_virtual_position(99.5);
        assert_eq!(media.state().position, 109.5);
        assert_eq!(session.virtual_position(), 99.5);
    }

    #[test]
    fn test_virtual_duration_and_ended() {
        let media = FakeMediaElement::with_media(0., 110.);
        let mut session = WindowSession::open(media.clone(), TimeWindow::new(10., Some(40.)));
        assert_eq!(session.virtual_duration(), 30.);
        assert!(!session.is_virtually_ended());

        media.state_mut().position = 40.;
        assert!(session.is_virtually_ended());

        session.set_end(None);
        assert_eq!(session.virtual_duration(), 100.);
        assert!(!session.is_virtually_ended());
    }

    #[test]
    fn test_open_observes_and_clamps() {
        let media = FakeMediaElement::with_media(3., 110.);
        let _session = WindowSession::open(media.clone(), TimeWindow::new(10., None));
        assert_eq!(media.state().observe_count, 1);
        assert_eq!(media.state().position, 10.);
    }

    #[test]
    fn test_window_mutation_reclamps_immediately() {
        let media = FakeMediaElement::with_media(50., 110.);
        let mut session = WindowSession::open(media.clone(), TimeWindow::new(10., None));
        assert_eq!(media.state().position, 50.);

        // Shrinking the window below the playhead pulls it back in.
        session.set_end(Some(40.));
        assert_eq!(media.state().position, 40.);

        session.set_start(45.);
        // The playhead now sits before the new start, so it snaps onto it.
        assert_eq!(media.state().position, 45.);
    }

    #[test]
    fn test_virtual_time_ranges_follow_window() {
        let media = FakeMediaElement::with_media(0., 110.);
        {
            let mut state = media.state_mut();
            state.buffered.add(5., 15.);
            state.seekable.add(0., 110.);
        }
        let session = WindowSession::open(media, TimeWindow::new(5., Some(15.)));
        assert_eq!(
            session
                .virtual_time_ranges(TimeRangeKind::Buffered)
                .to_flat_pairs(),
            vec![0., 10.]
        );
        assert_eq!(
            session
                .virtual_time_ranges(TimeRangeKind::Seekable)
                .to_flat_pairs(),
            vec![0., 10.]
        );
        assert_eq!(
            session
                .virtual_time_ranges(TimeRangeKind::Played)
                .to_flat_pairs(),
            vec![0., 0.]
        );
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let media = FakeMediaElement::with_media(0., 110.);
        let mut session = WindowSession::open(media.clone(), TimeWindow::new(10., Some(40.)));
        session.set_shim(true);
        assert!(!media.state().intercepted.is_empty());

        session.destroy();
        session.destroy();
        assert!(media.state().intercepted.is_empty());
        // The second destroy never reached the element.
        assert_eq!(media.state().unobserve_count, 1);
        assert!(!session.is_shim_active());
    }
}
