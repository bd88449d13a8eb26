//! Draft-form machinery shared by every back-office editor.
//!
//! A draft is a client-local copy of a resource's fields backing a
//! create/edit form; it has no identity until submission succeeds. This
//! module owns the rules every draft obeys, so the per-resource types stay
//! plain data:
//!
//! - **Attachment tri-state**: a file field is `Unset`, still referencing
//!   the server's `Existing` path, or `Replacement` with a freshly chosen
//!   local file. Removal is an explicit flag on the draft, never inferred
//!   from an absent field, so editing a resource without touching its file
//!   can never erase the server-side upload.
//! - **Sub-list slots**: ordered lists of short text entries always keep at
//!   least one (possibly empty) slot so the form has a row to edit; empty
//!   slots are pruned when the payload is built, not while typing.
//! - **Upload rules**: MIME allow-list and size ceiling checked before the
//!   draft changes state; a bad file leaves the attachment untouched.
//! - **Payload assembly**: JSON body by default, multipart when a file part
//!   is present, with array fields flattened into indexed keys
//!   (`features[0]`, `rows[0][name]`) the way the API's form parser expects.

use base64::engine::general_purpose;
use base64::Engine as _;
use serde_json::Value;

use crate::config;

/// A newly chosen local file plus the metadata the form needs to render it.
/// `preview` holds a base64 data URL for images once the read completes.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub file: web_sys::File,
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub preview: Option<String>,
}

/// The three states of a draft's file field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Attachment {
    #[default]
    Unset,
    /// Server-relative path of the upload the resource already has.
    Existing(String),
    /// A local file chosen in this form, not yet submitted.
    Replacement(LocalFile),
}

impl Attachment {
    pub fn from_path(path: &Option<String>) -> Self {
        match path {
            Some(p) if !p.is_empty() => Attachment::Existing(p.clone()),
            _ => Attachment::Unset,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Attachment::Unset)
    }

    /// The file to send, if and only if the user chose a replacement.
    pub fn upload(&self) -> Option<web_sys::File> {
        match self {
            Attachment::Replacement(local) => Some(local.file.clone()),
            _ => None,
        }
    }

    /// URL the form can show: resolved server path for an existing upload,
    /// the local data URL for a replacement once its read finished.
    pub fn view_url(&self) -> Option<String> {
        match self {
            Attachment::Unset => None,
            Attachment::Existing(path) => Some(config::asset_url(path)),
            Attachment::Replacement(local) => local.preview.clone(),
        }
    }

    pub fn file_name(&self) -> Option<String> {
        match self {
            Attachment::Unset => None,
            Attachment::Existing(path) => {
                path.rsplit('/').next().map(|segment| segment.to_string())
            }
            Attachment::Replacement(local) => Some(local.name.clone()),
        }
    }
}

/// Which upload rules apply to a file field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Document,
}

const IMAGE_MIMES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
const IMAGE_MAX_BYTES: u64 = 1024 * 1024;
const DOCUMENT_MIMES: &[&str] = &["application/pdf"];
const DOCUMENT_MAX_BYTES: u64 = 5 * 1024 * 1024;

impl UploadKind {
    pub fn accept(self) -> &'static str {
        match self {
            UploadKind::Image => "image/jpeg,image/png,image/webp",
            UploadKind::Document => "application/pdf",
        }
    }

    /// Validates a chosen file's MIME type and size. Errors are the
    /// field-level messages shown next to the input.
    pub fn check(self, mime: &str, size: u64) -> Result<(), String> {
        match self {
            UploadKind::Image => {
                if !IMAGE_MIMES.contains(&mime) {
                    return Err("Only JPEG, PNG or WEBP images are allowed".to_string());
                }
                if size > IMAGE_MAX_BYTES {
                    return Err("Images must be 1 MB or smaller".to_string());
                }
            }
            UploadKind::Document => {
                if !DOCUMENT_MIMES.contains(&mime) {
                    return Err("Only PDF documents are allowed".to_string());
                }
                if size > DOCUMENT_MAX_BYTES {
                    return Err("Documents must be 5 MB or smaller".to_string());
                }
            }
        }
        Ok(())
    }
}

/// Guarantees the form always has a row to edit.
pub fn ensure_slot(rows: &mut Vec<String>) {
    if rows.is_empty() {
        rows.push(String::new());
    }
}

pub fn add_row(rows: &mut Vec<String>) {
    rows.push(String::new());
}

/// Removes a slot unless it is the last one; the floor keeps the form
/// renderable and is a deliberate no-op on a single remaining slot.
pub fn remove_row(rows: &mut Vec<String>, index: usize) {
    if rows.len() > 1 && index < rows.len() {
        rows.remove(index);
    }
}

pub fn set_row(rows: &mut [String], index: usize, value: String) {
    if let Some(slot) = rows.get_mut(index) {
        *slot = value;
    }
}

/// Sub-list slots as submitted: trimmed, empty slots dropped, order kept.
pub fn pruned(rows: &[String]) -> Vec<String> {
    rows.iter()
        .map(|row| row.trim().to_string())
        .filter(|row| !row.is_empty())
        .collect()
}

/// Required-field presence, the only validation applied at submit time.
pub fn required(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

pub fn valid_email(value: &str) -> bool {
    regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map(|re| re.is_match(value.trim()))
        .unwrap_or(false)
}

/// What actually goes on the wire for a create or update.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<(&'static str, web_sys::File)>,
    },
}

/// Builds the outgoing payload: multipart when any file part was chosen,
/// plain JSON otherwise.
pub fn payload(body: Value, files: Vec<(&'static str, Option<web_sys::File>)>) -> Payload {
    let chosen: Vec<(&'static str, web_sys::File)> = files
        .into_iter()
        .filter_map(|(key, file)| file.map(|f| (key, f)))
        .collect();
    if chosen.is_empty() {
        Payload::Json(body)
    } else {
        Payload::Multipart {
            fields: flatten(&body),
            files: chosen,
        }
    }
}

/// Flattens a JSON object into multipart fields. Arrays become indexed
/// keys, one level of record nesting becomes `key[i][sub]`, nulls are
/// omitted, booleans are sent as `1`/`0`.
pub fn flatten(body: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    if let Value::Object(map) = body {
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for (index, item) in items.iter().enumerate() {
                        match item {
                            Value::Object(sub) => {
                                for (sub_key, sub_value) in sub {
                                    if let Some(text) = scalar(sub_value) {
                                        out.push((format!("{key}[{index}][{sub_key}]"), text));
                                    }
                                }
                            }
                            other => {
                                if let Some(text) = scalar(other) {
                                    out.push((format!("{key}[{index}]"), text));
                                }
                            }
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar(other) {
                        out.push((key.clone(), text));
                    }
                }
            }
        }
    }
    out
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        _ => None,
    }
}

/// Stable digest of a draft's body, captured when a form opens and compared
/// on close to detect unsaved changes.
pub fn fingerprint(body: &Value) -> String {
    format!("{:x}", md5::compute(body.to_string()))
}

/// Base64 data URL for a freshly read image, used as the local preview.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pruning_drops_empty_slots_and_keeps_order() {
        let rows = vec![
            "a".to_string(),
            "".to_string(),
            "b".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(pruned(&rows), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn remove_row_refuses_to_empty_the_list() {
        let mut rows = vec!["only".to_string()];
        remove_row(&mut rows, 0);
        assert_eq!(rows, vec!["only".to_string()]);

        let mut rows = vec!["a".to_string(), "b".to_string()];
        remove_row(&mut rows, 0);
        assert_eq!(rows, vec!["b".to_string()]);
    }

    #[test]
    fn remove_row_ignores_out_of_range_indexes() {
        let mut rows = vec!["a".to_string(), "b".to_string()];
        remove_row(&mut rows, 5);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn ensure_slot_keeps_one_editable_row() {
        let mut rows = Vec::new();
        ensure_slot(&mut rows);
        assert_eq!(rows, vec![String::new()]);
        ensure_slot(&mut rows);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn image_rules_reject_wrong_mime_and_oversize() {
        assert!(UploadKind::Image.check("image/png", 1000).is_ok());
        assert!(UploadKind::Image.check("image/webp", 1024 * 1024).is_ok());
        assert!(UploadKind::Image.check("application/pdf", 1000).is_err());
        assert!(UploadKind::Image.check("image/gif", 1000).is_err());
        assert!(UploadKind::Image.check("image/png", 1024 * 1024 + 1).is_err());
    }

    #[test]
    fn document_rules_accept_only_pdf() {
        assert!(UploadKind::Document.check("application/pdf", 1000).is_ok());
        assert!(UploadKind::Document.check("image/png", 1000).is_err());
        assert!(UploadKind::Document
            .check("application/pdf", 6 * 1024 * 1024)
            .is_err());
    }

    #[test]
    fn required_checks_trimmed_presence() {
        assert!(required("Title", "x").is_ok());
        assert_eq!(required("Title", "  ").unwrap_err(), "Title is required");
    }

    #[test]
    fn email_validation() {
        assert!(valid_email("ada@example.com"));
        assert!(valid_email("  ada@example.com "));
        assert!(!valid_email("ada@example"));
        assert!(!valid_email("not an email"));
    }

    #[test]
    fn flatten_indexes_arrays_and_nested_records() {
        let body = json!({
            "title": "Corporate Law",
            "order": 3,
            "visible": true,
            "skip": null,
            "features": ["a", "b"],
            "rows": [{"name": "x", "years": 2}],
        });
        let fields = flatten(&body);
        assert!(fields.contains(&("title".to_string(), "Corporate Law".to_string())));
        assert!(fields.contains(&("order".to_string(), "3".to_string())));
        assert!(fields.contains(&("visible".to_string(), "1".to_string())));
        assert!(fields.contains(&("features[0]".to_string(), "a".to_string())));
        assert!(fields.contains(&("features[1]".to_string(), "b".to_string())));
        assert!(fields.contains(&("rows[0][name]".to_string(), "x".to_string())));
        assert!(fields.contains(&("rows[0][years]".to_string(), "2".to_string())));
        assert!(!fields.iter().any(|(key, _)| key == "skip"));
    }

    #[test]
    fn json_payload_when_no_file_chosen() {
        let body = json!({"title": "x"});
        match payload(body.clone(), vec![("image", None)]) {
            Payload::Json(sent) => assert_eq!(sent, body),
            Payload::Multipart { .. } => panic!("expected a JSON payload"),
        }
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = fingerprint(&json!({"title": "x"}));
        let b = fingerprint(&json!({"title": "x"}));
        let c = fingerprint(&json!({"title": "y"}));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn attachment_maps_stored_paths() {
        assert_eq!(Attachment::from_path(&None), Attachment::Unset);
        assert_eq!(Attachment::from_path(&Some(String::new())), Attachment::Unset);
        let existing = Attachment::from_path(&Some("uploads/a.png".to_string()));
        assert_eq!(existing, Attachment::Existing("uploads/a.png".to_string()));
        assert_eq!(existing.file_name().unwrap(), "a.png");
        assert!(existing.upload().is_none());
    }

    #[test]
    fn data_url_encodes_mime_and_bytes() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }
}
