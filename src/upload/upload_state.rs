//! Upload form state
//!
//! Four required inputs (title, artist, cover, audio). Publishing is gated
//! on all of them being filled and on no publish already running.

use tui_textarea::TextArea;

use crate::api::PublishPayload;
use crate::error::{FetchError, UploadError};
use crate::widgets::textarea::{create_single_line_textarea, textarea_text};

pub const PUBLISHING_TEXT: &str = "Publishing your song...";
pub const PUBLISHED_TEXT: &str = "Music uploaded successfully!";

/// Input fields of the upload form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Artist,
    Cover,
    Audio,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Artist,
        FormField::Cover,
        FormField::Audio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Artist => "artist",
            FormField::Cover => "cover",
            FormField::Audio => "audio",
        }
    }

    fn index(&self) -> usize {
        match self {
            FormField::Title => 0,
            FormField::Artist => 1,
            FormField::Cover => 2,
            FormField::Audio => 3,
        }
    }
}

pub struct UploadForm {
    fields: [TextArea<'static>; 4],
    publishing: bool,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            fields: [
                create_single_line_textarea(),
                create_single_line_textarea(),
                create_single_line_textarea(),
                create_single_line_textarea(),
            ],
            publishing: false,
        }
    }

    pub fn field(&self, field: FormField) -> &TextArea<'static> {
        &self.fields[field.index()]
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextArea<'static> {
        &mut self.fields[field.index()]
    }

    /// Current text of a field
    pub fn value(&self, field: FormField) -> &str {
        textarea_text(self.field(field))
    }

    /// Replace the text of a field
    pub fn set_value(&mut self, field: FormField, text: &str) {
        let textarea = self.field_mut(field);
        *textarea = create_single_line_textarea();
        textarea.insert_str(text);
    }

    /// Fields that are still blank, in tab order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        FormField::ALL
            .iter()
            .filter(|field| self.value(**field).trim().is_empty())
            .map(|field| field.label())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_publishing(&self) -> bool {
        self.publishing
    }

    /// Whether the publish action is enabled
    pub fn can_publish(&self) -> bool {
        self.is_complete() && !self.publishing
    }

    /// Start publishing; returns the payload to send
    pub fn begin_publish(&mut self) -> Result<PublishPayload, UploadError> {
        if self.publishing {
            return Err(UploadError::AlreadyPublishing);
        }
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(UploadError::Incomplete { missing });
        }

        self.publishing = true;
        Ok(PublishPayload {
            title: self.value(FormField::Title).trim().to_string(),
            artist: self.value(FormField::Artist).trim().to_string(),
            cover: self.value(FormField::Cover).trim().to_string(),
            audio: self.value(FormField::Audio).trim().to_string(),
        })
    }

    /// Finish a publish; the form is reset only on success
    pub fn finish_publish(&mut self, result: &Result<serde_json::Value, FetchError>) {
        self.publishing = false;
        match result {
            Ok(echoed) => {
                log::info!("Song published, server replied {}", echoed);
                self.reset();
            }
            Err(e) => log::warn!("Publish failed: {}", e),
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        for field in FormField::ALL {
            self.set_value(field, "");
        }
    }
}
