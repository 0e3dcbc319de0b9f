//! Merging body fields and binary blobs into one multipart payload.

use crate::error::Result;
use crate::utils::params::{filter_empty_params_each, scalar_string};

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Custom merge routine placing blobs into the multipart form.
///
/// Receives the form with the data fields already in place plus the raw blob
/// list, and must append the blobs itself.
pub type SequenceFn = Box<dyn Fn(Form, &[BlobPart]) -> Form + Send + Sync>;

/// A binary blob to attach to an Upload-mode call.
#[derive(Debug, Clone)]
pub struct BlobPart {
    /// Blob content.
    pub bytes: Bytes,
    /// Optional file name recorded in the part's content disposition.
    pub file_name: Option<String>,
    /// Optional MIME type of the part.
    pub mime: Option<String>,
}

impl BlobPart {
    /// Creates a blob from its content.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: None,
            mime: None,
        }
    }

    /// Sets the file name recorded for the part.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the MIME type of the part.
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub(crate) fn to_part(&self) -> Result<Part> {
        let mut part = Part::bytes(self.bytes.to_vec());
        if let Some(file_name) = &self.file_name {
            part = part.file_name(file_name.clone());
        }
        if let Some(mime) = &self.mime {
            part = part.mime_str(mime)?;
        }
        Ok(part)
    }
}

/// Field name for a blob at `index`, with positional bracket notation when
/// sequencing applies.
pub(crate) fn sequence_field_name(field: &str, index: usize, sequenced: bool) -> String {
    if sequenced {
        format!("{field}[{index}]")
    } else {
        field.to_string()
    }
}

/// Merges the caller's body fields and blobs into a single multipart form.
///
/// Scalar fields survive the one-level empty-value pruning and are copied in
/// as text parts. Blobs land under `file_field`; with more than one blob and
/// sequencing enabled the field names gain positional suffixes (`file[0]`,
/// `file[1]`, ...), while a single blob keeps the plain field name. A
/// `custom_sequence` routine takes over blob placement entirely.
pub(crate) fn build_multipart(
    data: Value,
    files: &[BlobPart],
    file_field: &str,
    enable_sequence: bool,
    custom_sequence: Option<&SequenceFn>,
) -> Result<Form> {
    let mut form = Form::new();

    if let Value::Object(mut map) = data {
        let mut fields = Vec::new();
        filter_empty_params_each(&mut map, |key, value| {
            fields.push((key.to_string(), scalar_string(value)));
        });
        for (key, value) in fields {
            form = form.text(key, value);
        }
    }

    if !files.is_empty() {
        if let Some(sequence) = custom_sequence {
            form = sequence(form, files);
        } else {
            let sequenced = enable_sequence && files.len() > 1;
            for (index, file) in files.iter().enumerate() {
                form = form.part(
                    sequence_field_name(file_field, index, sequenced),
                    file.to_part()?,
                );
            }
        }
    }

    Ok(form)
}
