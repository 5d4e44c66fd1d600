use html_drop::WidgetError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// A registered DOM listener. Dropping it unregisters the callback.
pub(super) struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub(super) fn new<F>(
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<Self, WidgetError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        target
            .add_event_listener_with_callback(event, function)
            .map_err(|_| WidgetError::Listener { event })?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let function: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, function);
    }
}
