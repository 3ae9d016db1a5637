use std::collections::HashMap;

use super::WindowSession;
use crate::bindings::{MediaElementId, TimerId};
use crate::dispatcher::PlaybackEvent;
use crate::media_element::MediaElementHandle;
use crate::time_window::TimeWindow;
use crate::Logger;

/// Lookup table enforcing the one-session-per-element invariant.
///
/// Entries are created when a window is declared for an element and removed
/// when it disappears; re-declaring a window for an already-monitored element
/// updates the existing session in place so no second listener set or double
/// patching can occur.
pub(crate) struct SessionRegistry<M: MediaElementHandle> {
    sessions: HashMap<MediaElementId, WindowSession<M>>,
}

impl<M: MediaElementHandle> SessionRegistry<M> {
    pub(crate) fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Open a session for `media_element_id`, or update the window of the
    /// session already monitoring it.
    pub(crate) fn open(&mut self, media_element_id: MediaElementId, media: M, window: TimeWindow) {
        if let Some(session) = self.sessions.get_mut(&media_element_id) {
            session.set_start(window.start);
            session.set_end(window.end);
        } else {
            self.sessions
                .insert(media_element_id, WindowSession::open(media, window));
        }
    }

    /// Destroy and remove the session monitoring `media_element_id`.
    ///
    /// Returns `false` if no session monitored that element, in which case
    /// nothing happened.
    pub(crate) fn close(&mut self, media_element_id: MediaElementId) -> bool {
        match self.sessions.remove(&media_element_id) {
            Some(mut session) => {
                session.destroy();
                true
            }
            None => false,
        }
    }

    /// Destroy and remove every session.
    pub(crate) fn close_all(&mut self) {
        for (_, mut session) in self.sessions.drain() {
            session.destroy();
        }
    }

    pub(crate) fn contains(&self, media_element_id: MediaElementId) -> bool {
        self.sessions.contains_key(&media_element_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.sessions.len()
    }

    pub(crate) fn session(&self, media_element_id: MediaElementId) -> Option<&WindowSession<M>> {
        self.sessions.get(&media_element_id)
    }

    pub(crate) fn session_mut(
        &mut self,
        media_element_id: MediaElementId,
    ) -> Option<&mut WindowSession<M>> {
        self.sessions.get_mut(&media_element_id)
    }

    /// Route a relayed native playback event to the session monitoring the
    /// element, if any.
    pub(crate) fn on_playback_event(
        &mut self,
        media_element_id: MediaElementId,
        event: PlaybackEvent,
    ) {
        match self.sessions.get_mut(&media_element_id) {
            Some(session) => session.handle_event(event),
            None => Logger::debug(&format!(
                "Registry: dropping {:?} for unmonitored element {}",
                event, media_element_id
            )),
        }
    }

    /// Route an elapsed boundary-poll timer to the session that armed it.
    pub(crate) fn on_poll_timer(&mut self, id: TimerId) {
        if let Some(session) = self
            .sessions
            .values_mut()
            .find(|s| s.pending_poll() == Some(id))
        {
            session.on_poll();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_element::fake::FakeMediaElement;

    #[test]
    fn test_reopening_updates_the_existing_session() {
        let media = FakeMediaElement::with_media(0., 110.);
        let mut registry = SessionRegistry::new();
        registry.open(1, media.clone(), TimeWindow::new(10., None));
        registry.open(1, media.clone(), TimeWindow::new(20., Some(50.)));

        assert_eq!(registry.len(), 1);
        // A single listener set: the second open did not re-observe.
        assert_eq!(media.state().observe_count, 1);
        assert_eq!(
            registry.session(1).unwrap().window(),
            TimeWindow::new(20., Some(50.))
        );
    }

    #[test]
    fn test_close_twice_is_a_no_op() {
        let media = FakeMediaElement::with_media(0., 110.);
        let mut registry = SessionRegistry::new();
        registry.open(1, media.clone(), TimeWindow::new(10., None));

        assert!(registry.close(1));
        assert!(!registry.close(1));
        assert_eq!(media.state().unobserve_count, 1);
        assert!(!registry.contains(1));
    }

    #[test]
    fn test_close_restores_intercepted_properties() {
        let media = FakeMediaElement::with_media(0., 110.);
        let mut registry = SessionRegistry::new();
        registry.open(1, media.clone(), TimeWindow::new(10., None));
        registry.session_mut(1).unwrap().set_shim(true);
        assert!(!media.state().intercepted.is_empty());

        registry.close(1);
        assert!(media.state().intercepted.is_empty());
    }

    #[test]
    fn test_poll_timer_routed_to_arming_session() {
        let media = FakeMediaElement::with_media(39.9, 110.);
        let mut registry = SessionRegistry::new();
        registry.open(1, media.clone(), TimeWindow::new(10., Some(40.)));
        registry.on_playback_event(1, PlaybackEvent::TimeUpdate);
        let timer_id = registry.session(1).unwrap().pending_poll().unwrap();

        media.state_mut().position = 40.5;
        registry.on_poll_timer(timer_id);
        assert!(media.state().paused);
        assert!(registry.session(1).unwrap().pending_poll().is_none());
    }

    #[test]
    fn test_close_cancels_pending_poll() {
        let media = FakeMediaElement::with_media(39.9, 110.);
        let mut registry = SessionRegistry::new();
        registry.open(1, media.clone(), TimeWindow::new(10., Some(40.)));
        registry.on_playback_event(1, PlaybackEvent::TimeUpdate);
        let timer_id = registry.session(1).unwrap().pending_poll().unwrap();

        registry.close(1);
        assert_eq!(media.state().cleared_polls, vec![timer_id]);
    }

    #[test]
    fn test_events_for_unmonitored_elements_are_dropped() {
        let mut registry: SessionRegistry<FakeMediaElement> = SessionRegistry::new();
        registry.on_playback_event(7, PlaybackEvent::TimeUpdate);
        registry.on_poll_timer(1.);
        assert_eq!(registry.len(), 0);
    }
}
