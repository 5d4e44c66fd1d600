use thiserror::Error;

/// Failures while setting the widget up.
///
/// A rejected file is not an error; see [`crate::SelectionOutcome`].
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("no document available")]
    NoDocument,

    #[error("element {selector} not found")]
    MissingElement { selector: String },

    #[error("element {selector} is not {expected}")]
    WrongElementKind {
        selector: String,
        expected: &'static str,
    },

    #[error("failed to register {event} listener")]
    Listener { event: &'static str },

    #[error("invalid widget config: {0}")]
    Config(#[from] serde_json::Error),
}

impl WidgetError {
    pub fn missing_id(id: &str) -> Self {
        WidgetError::MissingElement {
            selector: format!("#{id}"),
        }
    }

    pub fn missing_class(class: &str) -> Self {
        WidgetError::MissingElement {
            selector: format!(".{class}"),
        }
    }
}
