/// A file the user chose or dropped, as reported by the browser.
///
/// `mime` is whatever the platform declared; it may be empty or wrong.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileCandidate {
    pub name: String,
    pub mime: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
        }
    }

    /// Lowercased text after the last `.` of the name, without the dot.
    ///
    /// A name with no `.` has an empty extension, as does a trailing dot.
    pub fn extension(&self) -> String {
        match self.name.rfind('.') {
            Some(i) => self.name[i + 1..].to_lowercase(),
            None => String::new(),
        }
    }
}
