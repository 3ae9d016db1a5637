use crate::bindings::{MediaProperty, SyntheticMediaEvent};
use crate::media_element::MediaElementHandle;
use crate::time_window::TimeWindow;
use crate::Logger;

/// Properties intercepted while the shim is active, in installation order.
const INTERCEPTED_PROPERTIES: [MediaProperty; 6] = [
    MediaProperty::CurrentTime,
    MediaProperty::Duration,
    MediaProperty::Ended,
    MediaProperty::Seekable,
    MediaProperty::Buffered,
    MediaProperty::Played,
];

/// Owns installation and removal of the full property interception (the
/// "shim") on a media element, so external readers of `currentTime`,
/// `duration`, `ended` and the interval sets observe the virtual timeline.
///
/// The replacement accessors themselves live on the JavaScript side and call
/// back into the `Dispatcher`'s virtual accessors; this proxy only drives
/// which properties are intercepted and the synthetic notifications around the
/// switch.
pub(crate) struct TimelineProxy {
    /// Properties currently intercepted on the element. Empty when inactive.
    /// Properties the element does not expose are skipped at activation and
    /// never appear here.
    intercepted: Vec<MediaProperty>,

    active: bool,
}

impl TimelineProxy {
    pub(crate) fn new() -> Self {
        Self {
            intercepted: vec![],
            active: false,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    /// Install the shim on the element. No-op when already active.
    ///
    /// Once every accessor is installed, a synthetic `durationchange` then
    /// `progress` are dispatched so listeners reading the newly-virtualized
    /// properties see consistent values, and the playhead observed before the
    /// switch is re-asserted through the window: the position a consumer was
    /// reading becomes the virtual position.
    pub(crate) fn activate(&mut self, media: &impl MediaElementHandle, window: &TimeWindow) {
        if self.active {
            return;
        }
        let pre_activation_position = media.position();

        for property in INTERCEPTED_PROPERTIES {
            if media.intercept_property(property) {
                self.intercepted.push(property);
            }
        }
        self.active = true;

        media.dispatch_event(SyntheticMediaEvent::DurationChange);
        media.dispatch_event(SyntheticMediaEvent::Progress);
        media.set_position(window.to_native(pre_activation_position));
        Logger::debug("Proxy: timeline interception activated");
    }

    /// Remove the shim, restoring every previously intercepted accessor
    /// verbatim. No-op when inactive.
    ///
    /// `durationchange`, `progress` and `timeupdate` are then dispatched so
    /// dependent UI reverts to native semantics.
    pub(crate) fn deactivate(&mut self, media: &impl MediaElementHandle) {
        if !self.active {
            return;
        }
        for property in self.intercepted.drain(..) {
            media.restore_property(property);
        }
        self.active = false;

        media.dispatch_event(SyntheticMediaEvent::DurationChange);
        media.dispatch_event(SyntheticMediaEvent::Progress);
        media.dispatch_event(SyntheticMediaEvent::TimeUpdate);
        Logger::debug("Proxy: timeline interception deactivated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_element::fake::FakeMediaElement;

    #[test]
    fn test_activate_intercepts_supported_properties() {
        let media = FakeMediaElement::with_media(0., 100.);
        let mut proxy = TimelineProxy::new();
        proxy.activate(&media, &TimeWindow::new(10., None));

        assert!(proxy.is_active());
        assert_eq!(media.state().intercepted, INTERCEPTED_PROPERTIES.to_vec());
    }

    #[test]
    fn test_activate_skips_unsupported_properties() {
        let media = FakeMediaElement::with_media(0., 100.);
        media
            .state_mut()
            .supported
            .retain(|p| *p != MediaProperty::Played && *p != MediaProperty::Seekable);
        let mut proxy = TimelineProxy::new();
        proxy.activate(&media, &TimeWindow::new(0., None));

        let intercepted = media.state().intercepted.clone();
        assert!(!intercepted.contains(&MediaProperty::Played));
        assert!(!intercepted.contains(&MediaProperty::Seekable));
        assert!(intercepted.contains(&MediaProperty::CurrentTime));
    }

    #[test]
    fn test_activate_notifies_and_reasserts_playhead() {
        let media = FakeMediaElement::with_media(4., 100.);
        let mut proxy = TimelineProxy::new();
        proxy.activate(&media, &TimeWindow::new(10., Some(40.)));

        assert_eq!(
            media.state().dispatched_events,
            vec![
                SyntheticMediaEvent::DurationChange,
                SyntheticMediaEvent::Progress
            ]
        );
        // The position observed before the switch becomes the virtual one.
        assert_eq!(media.state().position, 14.);
    }

    #[test]
    fn test_activate_twice_is_a_no_op() {
        let media = FakeMediaElement::with_media(0., 100.);
        let mut proxy = TimelineProxy::new();
        let window = TimeWindow::new(10., None);
        proxy.activate(&media, &window);
        let events_after_first = media.state().dispatched_events.len();
        let position_after_first = media.state().position;

        proxy.activate(&media, &window);
        assert_eq!(media.state().intercepted.len(), INTERCEPTED_PROPERTIES.len());
        assert_eq!(media.state().dispatched_events.len(), events_after_first);
        assert_eq!(media.state().position, position_after_first);
    }

    #[test]
    fn test_deactivate_restores_and_notifies() {
        let media = FakeMediaElement::with_media(0., 100.);
        let mut proxy = TimelineProxy::new();
        proxy.activate(&media, &TimeWindow::new(10., None));
        media.state_mut().dispatched_events.clear();

        proxy.deactivate(&media);
        assert!(!proxy.is_active());
        assert!(media.state().intercepted.is_empty());
        assert_eq!(
            media.state().dispatched_events,
            vec![
                SyntheticMediaEvent::DurationChange,
                SyntheticMediaEvent::Progress,
                SyntheticMediaEvent::TimeUpdate
            ]
        );
    }

    #[test]
    fn test_deactivate_when_inactive_is_a_no_op() {
        let media = FakeMediaElement::with_media(0., 100.);
        let mut proxy = TimelineProxy::new();
        proxy.deactivate(&media);
        assert!(media.state().dispatched_events.is_empty());
    }
}
