//! Which files the widget accepts.
//!
//! A candidate is valid when its declared MIME type is allowed OR its
//! extension is allowed. Browsers report MIME types inconsistently, so a
//! matching extension alone is enough. This is a convenience filter for the
//! form, not a content check.

use crate::candidate::FileCandidate;

pub const HTML_MIME_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];
pub const HTML_EXTENSIONS: &[&str] = &[".html", ".htm"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPolicy {
    mime_types: Vec<String>,
    /// Lowercased, stored without the leading dot.
    extensions: Vec<String>,
}

impl Default for AcceptPolicy {
    fn default() -> Self {
        Self::html()
    }
}

impl AcceptPolicy {
    /// Build a policy; extensions may be given with or without a leading dot.
    pub fn new<M, E>(mime_types: M, extensions: E) -> Self
    where
        M: IntoIterator,
        M::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mime_types = mime_types
            .into_iter()
            .map(|m| m.as_ref().trim().to_ascii_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            mime_types,
            extensions,
        }
    }

    /// `text/html`, `application/xhtml+xml`, `.html`, `.htm`.
    pub fn html() -> Self {
        Self::new(HTML_MIME_TYPES.iter(), HTML_EXTENSIONS.iter())
    }

    pub fn accepts(&self, candidate: &FileCandidate) -> bool {
        self.mime_matches(candidate) || self.extension_matches(candidate)
    }

    pub fn mime_matches(&self, candidate: &FileCandidate) -> bool {
        let mime = candidate.mime.trim();
        !mime.is_empty() && self.mime_types.iter().any(|m| m.eq_ignore_ascii_case(mime))
    }

    pub fn extension_matches(&self, candidate: &FileCandidate) -> bool {
        let ext = candidate.extension();
        !ext.is_empty() && self.extensions.iter().any(|e| *e == ext)
    }

    /// Value for the file input's `accept` attribute, extensions first.
    pub fn accept_attribute(&self) -> String {
        self.extensions
            .iter()
            .map(|e| format!(".{e}"))
            .chain(self.mime_types.iter().cloned())
            .collect::<Vec<_>>()
            .join(",")
    }
}
