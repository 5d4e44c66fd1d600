//! # html_drop
//!
//! Browser-free logic for a single-file HTML upload widget: a hidden file
//! input, a drop zone, a status label, and a submit button kept in one
//! consistent selection state.
//!
//! The DOM is reached only through the [`WidgetSurface`] trait, so the whole
//! interaction can be driven and tested on the host. The `html_drop_web`
//! crate provides the real browser surface.
//!
//! ## Quick Start
//!
//! ```
//! use html_drop::prelude::*;
//!
//! #[derive(Default)]
//! struct Headless {
//!     enabled: bool,
//! }
//!
//! impl WidgetSurface for Headless {
//!     type Files = [FileCandidate];
//!
//!     fn set_upload_enabled(&mut self, enabled: bool) {
//!         self.enabled = enabled;
//!     }
//!     fn show_status(&mut self, _status: &StatusText) {}
//!     fn clear_selection(&mut self) {}
//!     fn notify_rejected(&mut self, _message: &str) {}
//!     fn paint_drop_zone(&mut self, _paint: &ZonePaint) {}
//!     fn mirror_files(&mut self, _files: &[FileCandidate]) {}
//! }
//!
//! let mut widget = UploadWidget::new(Headless::default(), WidgetConfig::default());
//! assert!(!widget.surface().enabled);
//!
//! let picked = [FileCandidate::new("inventory.html", "text/html")];
//! assert_eq!(widget.handle_selection(&picked[..]), SelectionOutcome::Accepted);
//! assert!(widget.surface().enabled);
//! ```
//!
//! ## Modules
//!
//! - [`candidate`]: the file under validation
//! - [`policy`]: the MIME-or-extension validity check
//! - [`status`]: status label content and its markup
//! - [`surface`]: the injected DOM collaborators
//! - [`widget`]: the controller and its state machines
//! - [`config`]: serde-backed widget configuration

pub mod candidate;
pub mod config;
pub mod error;
pub mod policy;
pub mod status;
pub mod surface;
pub mod widget;

pub use candidate::FileCandidate;
pub use config::WidgetConfig;
pub use error::WidgetError;
pub use policy::AcceptPolicy;
pub use status::StatusText;
pub use surface::{FileList, WidgetSurface, ZonePaint};
pub use widget::{DragPhase, DragState, SelectionOutcome, SelectionState, UploadWidget};

/// Prelude module for convenient imports.
///
/// ```
/// use html_drop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::candidate::FileCandidate;
    pub use crate::config::WidgetConfig;
    pub use crate::error::WidgetError;
    pub use crate::policy::AcceptPolicy;
    pub use crate::status::StatusText;
    pub use crate::surface::{FileList, WidgetSurface, ZonePaint};
    pub use crate::widget::{
        DragPhase, DragState, SelectionOutcome, SelectionState, UploadWidget,
    };
}
