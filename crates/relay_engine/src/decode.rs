use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes as {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode a response body into UTF-8: BOM -> Content-Type charset ->
/// chardetng fallback.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedText, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let part = part.trim();
        let (key, value) = part.split_once('=')?;
        if key.eq_ignore_ascii_case("charset") {
            Some(value.trim_matches([' ', '"', '\''].as_ref()).to_string())
        } else {
            None
        }
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}
