//! Widget configuration.
//!
//! Every field has a default matching the stock upload page, so a JSON
//! document only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;
use crate::policy::{AcceptPolicy, HTML_EXTENSIONS, HTML_MIME_TYPES};
use crate::status::StatusText;
use crate::surface::ZonePaint;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_input_id")]
    pub input_id: String,
    #[serde(default = "default_button_id")]
    pub button_id: String,
    #[serde(default = "default_drop_zone_id")]
    pub drop_zone_id: String,
    /// Class of the status label; the first matching element is used.
    #[serde(default = "default_status_class")]
    pub status_class: String,

    #[serde(default = "default_mime_types")]
    pub accepted_mime_types: Vec<String>,
    #[serde(default = "default_extensions")]
    pub accepted_extensions: Vec<String>,

    #[serde(default = "default_rejection_notice")]
    pub rejection_notice: String,
    #[serde(default = "default_prompt_headline")]
    pub prompt_headline: String,
    #[serde(default = "default_prompt_hint")]
    pub prompt_hint: String,
    #[serde(default = "default_ready_hint")]
    pub ready_hint: String,

    #[serde(default = "default_hover_border")]
    pub hover_border: String,
    #[serde(default = "default_hover_background")]
    pub hover_background: String,
    #[serde(default = "default_neutral_border")]
    pub neutral_border: String,
    #[serde(default)]
    pub neutral_background: String,
}

fn default_input_id() -> String {
    "fileInput".to_string()
}

fn default_button_id() -> String {
    "uploadBtn".to_string()
}

fn default_drop_zone_id() -> String {
    "uploadArea".to_string()
}

fn default_status_class() -> String {
    "upload-text".to_string()
}

fn default_mime_types() -> Vec<String> {
    HTML_MIME_TYPES.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    HTML_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_rejection_notice() -> String {
    "Please upload a valid HTML file (.html or .htm).".to_string()
}

fn default_prompt_headline() -> String {
    "Drop Assigned Computer Name here".to_string()
}

fn default_prompt_hint() -> String {
    "or click to browse".to_string()
}

fn default_ready_hint() -> String {
    "Ready to extract".to_string()
}

fn default_hover_border() -> String {
    "#1c7ed6".to_string()
}

fn default_hover_background() -> String {
    "#f0f9ff".to_string()
}

fn default_neutral_border() -> String {
    "#d1d5da".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            input_id: default_input_id(),
            button_id: default_button_id(),
            drop_zone_id: default_drop_zone_id(),
            status_class: default_status_class(),
            accepted_mime_types: default_mime_types(),
            accepted_extensions: default_extensions(),
            rejection_notice: default_rejection_notice(),
            prompt_headline: default_prompt_headline(),
            prompt_hint: default_prompt_hint(),
            ready_hint: default_ready_hint(),
            hover_border: default_hover_border(),
            hover_background: default_hover_background(),
            neutral_border: default_neutral_border(),
            neutral_background: String::new(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn policy(&self) -> AcceptPolicy {
        AcceptPolicy::new(&self.accepted_mime_types, &self.accepted_extensions)
    }

    pub fn prompt(&self) -> StatusText {
        StatusText::prompt(&self.prompt_headline, &self.prompt_hint)
    }

    pub fn ready(&self, file_name: &str) -> StatusText {
        StatusText::ready(file_name, &self.ready_hint)
    }

    pub fn hover_paint(&self) -> ZonePaint {
        ZonePaint {
            border_color: self.hover_border.clone(),
            background_color: self.hover_background.clone(),
        }
    }

    pub fn neutral_paint(&self) -> ZonePaint {
        ZonePaint {
            border_color: self.neutral_border.clone(),
            background_color: self.neutral_background.clone(),
        }
    }
}
