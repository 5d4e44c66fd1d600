//! The upload widget controller.
//!
//! One controller owns one surface. Every entry point runs to completion and
//! leaves the surface consistent with [`SelectionState`]: the submit button
//! is enabled iff the latest selection attempt was accepted.

use tracing::{debug, info};

use crate::config::WidgetConfig;
use crate::policy::AcceptPolicy;
use crate::surface::{FileList, WidgetSurface};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    Selected {
        file_name: String,
    },
}

impl SelectionState {
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionState::Selected { .. })
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            SelectionState::Selected { file_name } => Some(file_name),
            SelectionState::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Neutral,
    Hovering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    pub fn event_name(self) -> &'static str {
        match self {
            DragPhase::Enter => "dragenter",
            DragPhase::Over => "dragover",
            DragPhase::Leave => "dragleave",
            DragPhase::Drop => "drop",
        }
    }

    pub fn all() -> &'static [DragPhase] {
        &[
            DragPhase::Enter,
            DragPhase::Over,
            DragPhase::Leave,
            DragPhase::Drop,
        ]
    }

    fn target_state(self) -> DragState {
        match self {
            DragPhase::Enter | DragPhase::Over => DragState::Hovering,
            DragPhase::Leave | DragPhase::Drop => DragState::Neutral,
        }
    }
}

/// What a selection attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// No files; nothing changed.
    Ignored,
    Accepted,
    Rejected,
}

pub struct UploadWidget<S: WidgetSurface> {
    surface: S,
    config: WidgetConfig,
    policy: AcceptPolicy,
    selection: SelectionState,
    drag: DragState,
}

impl<S: WidgetSurface> UploadWidget<S> {
    /// Take ownership of the surface and put it in the empty state: button
    /// disabled, prompt shown, neutral drop zone.
    pub fn new(surface: S, config: WidgetConfig) -> Self {
        let policy = config.policy();
        let mut widget = Self {
            surface,
            config,
            policy,
            selection: SelectionState::Empty,
            drag: DragState::Neutral,
        };
        widget.surface.set_upload_enabled(false);
        widget.surface.show_status(&widget.config.prompt());
        widget
    }

    pub fn handle_selection(&mut self, files: &S::Files) -> SelectionOutcome {
        let Some(candidate) = files.first_candidate() else {
            return SelectionOutcome::Ignored;
        };
        if files.len() > 1 {
            debug!(count = files.len(), "only the first file is considered");
        }

        if !self.policy.accepts(&candidate) {
            info!(name = %candidate.name, mime = %candidate.mime, "rejected file");
            self.surface.notify_rejected(&self.config.rejection_notice);
            self.surface.clear_selection();
            self.surface.set_upload_enabled(false);
            self.surface.show_status(&self.config.prompt());
            self.selection = SelectionState::Empty;
            return SelectionOutcome::Rejected;
        }

        debug!(name = %candidate.name, "accepted file");
        self.surface.set_upload_enabled(true);
        self.surface.show_status(&self.config.ready(&candidate.name));
        self.selection = SelectionState::Selected {
            file_name: candidate.name,
        };
        SelectionOutcome::Accepted
    }

    /// Repaint the drop zone for a drag event. The binding suppresses the
    /// browser default before calling this.
    pub fn on_drag(&mut self, phase: DragPhase) {
        let next = phase.target_state();
        let paint = match next {
            DragState::Hovering => self.config.hover_paint(),
            DragState::Neutral => self.config.neutral_paint(),
        };
        if next != self.drag {
            debug!(event = phase.event_name(), state = ?next, "drop zone");
        }
        self.surface.paint_drop_zone(&paint);
        self.drag = next;
    }

    /// Restore the drop zone, mirror the dropped files into the input, then
    /// validate exactly as a manual pick would. A drop with no files (`None`
    /// or an empty list, e.g. dragged text) leaves the input untouched.
    pub fn on_drop(&mut self, files: Option<&S::Files>) -> SelectionOutcome {
        self.on_drag(DragPhase::Drop);
        let Some(files) = files.filter(|f| !f.is_empty()) else {
            return SelectionOutcome::Ignored;
        };
        self.surface.mirror_files(files);
        self.handle_selection(files)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
