use std::cell::RefCell;
use std::rc::Rc;

use html_drop::{DragPhase, UploadWidget, WidgetConfig, WidgetError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, DragEvent};

mod dom;
mod listeners;

use dom::{DomElements, DomFiles, DomSurface};
use listeners::EventListener;

/// Id of an optional `<script type="application/json">` holding a
/// `WidgetConfig` override.
pub const CONFIG_ELEMENT_ID: &str = "html-drop-config";

thread_local! {
    static MOUNTED: RefCell<Option<MountedWidget>> = const { RefCell::new(None) };
}

/// Mount the widget on the current document, waiting for `DOMContentLoaded`
/// if the markup is still loading. The widget lives until [`stop`].
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        report(&WidgetError::NoDocument);
        return;
    };

    if document.ready_state() != "loading" {
        mount_and_keep(&document);
        return;
    }

    let doc = document.clone();
    let on_ready = Closure::once_into_js(move || mount_and_keep(&doc));
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    if document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            on_ready.unchecked_ref(),
            &opts,
        )
        .is_err()
    {
        report(&WidgetError::Listener {
            event: "DOMContentLoaded",
        });
    }
}

/// Detach the widget mounted by [`start`], if any.
pub fn stop() {
    let previous = MOUNTED.with(|slot| slot.borrow_mut().take());
    drop(previous);
}

fn mount_and_keep(document: &Document) {
    stop();
    match read_config(document).and_then(|config| mount(document, config)) {
        Ok(widget) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(widget)),
        Err(e) => report(&e),
    }
}

fn read_config(document: &Document) -> Result<WidgetConfig, WidgetError> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(WidgetConfig::default());
    }
    WidgetConfig::from_json(&raw)
}

fn report(err: &WidgetError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("html_drop: {err}")));
}

/// A widget wired to the page. Dropping it (or calling [`detach`]) removes
/// every listener it registered.
///
/// [`detach`]: MountedWidget::detach
pub struct MountedWidget {
    // The controller itself is shared by the listener closures.
    _listeners: Vec<EventListener>,
}

impl MountedWidget {
    pub fn detach(self) {
        drop(self);
    }
}

/// Resolve the collaborators named by `config`, put the page in its initial
/// state, and register the change and drag listeners.
pub fn mount(document: &Document, config: WidgetConfig) -> Result<MountedWidget, WidgetError> {
    let elements = DomElements::resolve(document, &config)?;
    elements
        .input
        .set_accept(&config.policy().accept_attribute());

    let surface = DomSurface::new(elements.clone(), document.default_view());
    let widget = Rc::new(RefCell::new(UploadWidget::new(surface, config)));
    let mut listeners = Vec::with_capacity(1 + DragPhase::all().len());

    {
        let widget = Rc::clone(&widget);
        let input = elements.input.clone();
        listeners.push(EventListener::new(&elements.input, "change", move |_ev| {
            let Some(files) = input.files() else {
                return;
            };
            if let Ok(mut w) = widget.try_borrow_mut() {
                w.handle_selection(&DomFiles(files));
            }
        })?);
    }

    for &phase in DragPhase::all() {
        let widget = Rc::clone(&widget);
        listeners.push(EventListener::new(
            &elements.drop_zone,
            phase.event_name(),
            move |ev| {
                // Without this the browser navigates to the dropped file.
                ev.prevent_default();
                ev.stop_propagation();

                let Ok(mut w) = widget.try_borrow_mut() else {
                    return;
                };
                if phase == DragPhase::Drop {
                    let files = ev
                        .dyn_ref::<DragEvent>()
                        .and_then(DragEvent::data_transfer)
                        .and_then(|dt| dt.files())
                        .map(DomFiles);
                    w.on_drop(files.as_ref());
                } else {
                    w.on_drag(phase);
                }
            },
        )?);
    }

    Ok(MountedWidget {
        _listeners: listeners,
    })
}
