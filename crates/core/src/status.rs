//! Status label content.
//!
//! The label is rendered as a headline line plus a `<small>` hint line. Every
//! piece of text is escaped before it reaches markup, including the file name.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusText {
    /// Nothing valid selected yet.
    Prompt { headline: String, hint: String },
    /// A valid file is selected and the form can be submitted.
    Ready { file_name: String, hint: String },
}

impl StatusText {
    pub fn prompt(headline: impl Into<String>, hint: impl Into<String>) -> Self {
        StatusText::Prompt {
            headline: headline.into(),
            hint: hint.into(),
        }
    }

    pub fn ready(file_name: impl Into<String>, hint: impl Into<String>) -> Self {
        StatusText::Ready {
            file_name: file_name.into(),
            hint: hint.into(),
        }
    }

    /// Inner HTML for the status element.
    pub fn to_markup(&self) -> String {
        match self {
            StatusText::Prompt { headline, hint } => format!(
                "{}<br><small>{}</small>",
                escape_html(headline),
                escape_html(hint)
            ),
            StatusText::Ready { file_name, hint } => format!(
                "<strong>{}</strong> selected<br><small>{}</small>",
                escape_html(file_name),
                escape_html(hint)
            ),
        }
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
