//! The DOM collaborators the controller drives, behind traits.
//!
//! A browser binding implements [`WidgetSurface`] over the file input, the
//! submit button, the drop zone, and the status label. Tests implement it
//! with plain fields.

use crate::candidate::FileCandidate;
use crate::status::StatusText;

/// An ordered list of candidate files, as carried by a change or drop event.
pub trait FileList {
    fn len(&self) -> usize;

    fn candidate(&self, index: usize) -> Option<FileCandidate>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn first_candidate(&self) -> Option<FileCandidate> {
        self.candidate(0)
    }
}

impl FileList for [FileCandidate] {
    fn len(&self) -> usize {
        <[FileCandidate]>::len(self)
    }

    fn candidate(&self, index: usize) -> Option<FileCandidate> {
        self.get(index).cloned()
    }
}

impl FileList for Vec<FileCandidate> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn candidate(&self, index: usize) -> Option<FileCandidate> {
        self.get(index).cloned()
    }
}

/// Drop zone colors. An empty `background_color` means "clear the inline
/// background" so the stylesheet value shows again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonePaint {
    pub border_color: String,
    pub background_color: String,
}

pub trait WidgetSurface {
    type Files: FileList + ?Sized;

    /// Toggle the submit button's `disabled` flag.
    fn set_upload_enabled(&mut self, enabled: bool);

    fn show_status(&mut self, status: &StatusText);

    /// Clear the file input's value so re-picking the same file fires again.
    fn clear_selection(&mut self);

    /// Blocking user notice for a rejected file.
    fn notify_rejected(&mut self, message: &str);

    fn paint_drop_zone(&mut self, paint: &ZonePaint);

    /// Copy a dropped list into the file input's own list.
    fn mirror_files(&mut self, files: &Self::Files);
}
