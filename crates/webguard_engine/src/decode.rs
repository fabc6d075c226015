use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::{FetchError, FetchFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding_label: String,
}

/// Decode raw page bytes into UTF-8 using: BOM -> Content-Type charset ->
/// chardetng fallback.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedPage, FetchError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let part = part.trim();
        let prefix = part.get(..8)?;
        if !prefix.eq_ignore_ascii_case("charset=") {
            return None;
        }
        Some(part[8..].trim_matches([' ', '"', '\''].as_ref()).to_string())
    })
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedPage, FetchError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(FetchError::new(
            FetchFailure::Decode,
            format!("failed to decode page bytes as {}", enc.name()),
        ));
    }
    Ok(DecodedPage {
        html: text.into_owned(),
        encoding_label: enc.name().to_string(),
    })
}
