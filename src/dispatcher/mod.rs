use crate::{media_element::JsMediaElement, session::registry::SessionRegistry, wasm_bindgen};

mod api;
mod event_listeners;

pub(crate) use event_listeners::PlaybackEvent;

/// The `Dispatcher` is the windowing engine's interface exported to the
/// JavaScript-side, providing an API to open, mutate and destroy playback
/// windows over media elements, and receiving the native playback events the
/// JS glue relays.
///
/// The JavaScript property shims installed while a session's interception is
/// active call back into the virtual accessors exposed here.
#[wasm_bindgen]
pub struct Dispatcher {
    /// One active `WindowSession` per monitored media element.
    sessions: SessionRegistry<JsMediaElement>,
}
