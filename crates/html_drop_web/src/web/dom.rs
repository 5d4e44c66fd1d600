use html_drop::{
    FileCandidate, FileList, StatusText, WidgetConfig, WidgetError, WidgetSurface, ZonePaint,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// A browser `FileList` from an input or a drop.
pub(super) struct DomFiles(pub(super) web_sys::FileList);

impl FileList for DomFiles {
    fn len(&self) -> usize {
        self.0.length() as usize
    }

    fn candidate(&self, index: usize) -> Option<FileCandidate> {
        let file = self.0.get(u32::try_from(index).ok()?)?;
        Some(FileCandidate::new(file.name(), file.type_()))
    }
}

#[derive(Clone)]
pub(super) struct DomElements {
    pub(super) input: HtmlInputElement,
    pub(super) button: Element,
    pub(super) drop_zone: HtmlElement,
    pub(super) status: Element,
}

impl DomElements {
    /// Look up all four collaborators once. Any missing one fails the mount.
    pub(super) fn resolve(
        document: &Document,
        config: &WidgetConfig,
    ) -> Result<Self, WidgetError> {
        let input = element_by_id(document, &config.input_id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| wrong_kind(&config.input_id, "an <input>"))?;
        if !input.type_().eq_ignore_ascii_case("file") {
            return Err(wrong_kind(&config.input_id, "a file input"));
        }

        let button = element_by_id(document, &config.button_id)?;

        let drop_zone = element_by_id(document, &config.drop_zone_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| wrong_kind(&config.drop_zone_id, "an HTML element"))?;

        let status = document
            .query_selector(&format!(".{}", config.status_class))
            .ok()
            .flatten()
            .ok_or_else(|| WidgetError::missing_class(&config.status_class))?;

        Ok(Self {
            input,
            button,
            drop_zone,
            status,
        })
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::missing_id(id))
}

fn wrong_kind(id: &str, expected: &'static str) -> WidgetError {
    WidgetError::WrongElementKind {
        selector: format!("#{id}"),
        expected,
    }
}

pub(super) struct DomSurface {
    elements: DomElements,
    window: Option<Window>,
}

impl DomSurface {
    pub(super) fn new(elements: DomElements, window: Option<Window>) -> Self {
        Self { elements, window }
    }
}

impl WidgetSurface for DomSurface {
    type Files = DomFiles;

    fn set_upload_enabled(&mut self, enabled: bool) {
        // Attribute rather than property so both <button> and <input type=submit> work.
        let _ = self
            .elements
            .button
            .toggle_attribute_with_force("disabled", !enabled);
    }

    fn show_status(&mut self, status: &StatusText) {
        self.elements.status.set_inner_html(&status.to_markup());
    }

    fn clear_selection(&mut self) {
        self.elements.input.set_value("");
    }

    fn notify_rejected(&mut self, message: &str) {
        if let Some(w) = &self.window {
            let _ = w.alert_with_message(message);
        }
    }

    fn paint_drop_zone(&mut self, paint: &ZonePaint) {
        let style = self.elements.drop_zone.style();
        let _ = style.set_property("border-color", &paint.border_color);
        if paint.background_color.is_empty() {
            let _ = style.remove_property("background-color");
        } else {
            let _ = style.set_property("background-color", &paint.background_color);
        }
    }

    fn mirror_files(&mut self, files: &DomFiles) {
        self.elements.input.set_files(Some(&files.0));
    }
}
