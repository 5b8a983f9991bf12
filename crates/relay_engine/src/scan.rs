use std::sync::OnceLock;

use regex::Regex;

/// The two quoted-string fields the fetch scripts look for in a raw body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannedFields {
    pub name: Option<String>,
    pub image: Option<String>,
}

impl ScannedFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none()
    }
}

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""name"\s*:\s*"([^"\r\n]+)""#).expect("static pattern"))
}

fn image_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""image"\s*:\s*"([^"\r\n]+)""#).expect("static pattern"))
}

/// Scan a body line by line for the first `"name": "..."` and
/// `"image": "..."` occurrences, case-sensitive, stopping as soon as both
/// are found or the input runs out.
pub fn scan_name_and_image(body: &str) -> ScannedFields {
    let mut fields = ScannedFields::default();
    for line in body.lines() {
        if fields.name.is_none() && line.contains("\"name\"") {
            if let Some(caps) = name_pattern().captures(line) {
                fields.name = Some(caps[1].to_string());
            }
        }
        if fields.image.is_none() && line.contains("\"image\"") {
            if let Some(caps) = image_pattern().captures(line) {
                fields.image = Some(caps[1].to_string());
            }
        }
        if fields.name.is_some() && fields.image.is_some() {
            break;
        }
    }
    fields
}
