//! Request bodies.
//!
//! A record without pending files goes out as JSON. As soon as a file is
//! attached the whole record is sent as multipart: scalars become text
//! parts, arrays and objects become one JSON text part each, files are
//! binary parts.

use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;

/// File picked in a form, already read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Files waiting to be submitted, keyed by multipart part name. A part
/// name may hold several files (product gallery).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSet {
    files: Vec<(String, UploadFile)>,
}

impl UploadSet {
    pub fn add(&mut self, part: &str, file: UploadFile) {
        self.files.push((part.to_string(), file));
    }

    /// Keeps a single file under `part`.
    pub fn replace(&mut self, part: &str, file: UploadFile) {
        self.clear(part);
        self.add(part, file);
    }

    pub fn clear(&mut self, part: &str) {
        self.files.retain(|(name, _)| name != part);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn count(&self, part: &str) -> usize {
        self.files.iter().filter(|(name, _)| name == part).count()
    }

    pub fn file_names(&self, part: &str) -> Vec<String> {
        self.files
            .iter()
            .filter(|(name, _)| name == part)
            .map(|(_, file)| file.file_name.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UploadFile)> {
        self.files.iter().map(|(name, file)| (name.as_str(), file))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    File(UploadFile),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Json(Value),
    Multipart(Vec<(String, Part)>),
}

impl Payload {
    pub fn json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        Ok(Payload::Json(serde_json::to_value(body)?))
    }

    /// Body for a create/update of `record`, multipart when `uploads` is
    /// not empty.
    pub fn for_record<B: Serialize>(record: &B, uploads: &UploadSet) -> Result<Self, ApiError> {
        let value = serde_json::to_value(record)?;
        if uploads.is_empty() {
            return Ok(Payload::Json(value));
        }

        let mut parts = Vec::new();
        if let Value::Object(map) = value {
            for (key, field) in map {
                let text = match field {
                    Value::Null => continue,
                    Value::String(s) => s,
                    Value::Bool(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
                };
                parts.push((key, Part::Text(text)));
            }
        }
        for (name, file) in uploads.iter() {
            parts.push((name.to_string(), Part::File(file.clone())));
        }
        Ok(Payload::Multipart(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn png(name: &str) -> UploadFile {
        UploadFile {
            file_name: name.to_string(),
            mime: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[test]
    fn without_files_the_record_goes_as_json() {
        let body = json!({ "name": "Rice", "price": 10 });
        let payload = Payload::for_record(&body, &UploadSet::default()).unwrap();
        assert_eq!(payload, Payload::Json(body));
    }

    #[test]
    fn multipart_flattens_scalars_and_encodes_nested_values_as_json() {
        let body = json!({
            "name": "Rice",
            "price": 99.5,
            "isActive": true,
            "images": ["https://cdn/a.png"],
            "variants": [{ "name": "Pack", "options": [] }],
            "createdAt": null
        });
        let mut uploads = UploadSet::default();
        uploads.add("images", png("front.png"));
        uploads.add("images", png("back.png"));

        let Payload::Multipart(parts) = Payload::for_record(&body, &uploads).unwrap() else {
            panic!("expected multipart");
        };
        let text = |key: &str| {
            parts.iter().find_map(|(name, part)| match part {
                Part::Text(t) if name == key => Some(t.clone()),
                _ => None,
            })
        };
        assert_eq!(text("name").as_deref(), Some("Rice"));
        assert_eq!(text("price").as_deref(), Some("99.5"));
        assert_eq!(text("isActive").as_deref(), Some("true"));
        assert_eq!(text("images").as_deref(), Some(r#"["https://cdn/a.png"]"#));
        assert_eq!(text("variants").as_deref(), Some(r#"[{"name":"Pack","options":[]}]"#));
        assert_eq!(text("createdAt"), None);

        let files: Vec<_> = parts
            .iter()
            .filter_map(|(name, part)| match part {
                Part::File(f) => Some((name.as_str(), f.file_name.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(files, vec![("images", "front.png"), ("images", "back.png")]);
    }

    #[test]
    fn replace_keeps_one_file_per_part() {
        let mut uploads = UploadSet::default();
        uploads.replace("image", png("a.png"));
        uploads.replace("image", png("b.png"));
        assert_eq!(uploads.file_names("image"), vec!["b.png".to_string()]);
        uploads.clear("image");
        assert!(uploads.is_empty());
    }
}
