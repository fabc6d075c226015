use sha2::{Digest, Sha256};

/// SHA-256 fingerprint of `content`, lowercase hex (64 characters).
///
/// No normalization happens here; callers trim via [`normalize`] before
/// hashing so that surrounding whitespace in fetched text does not flap the
/// fingerprint between runs.
pub fn digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let bytes = hasher.finalize();
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

/// Strips leading and trailing whitespace from fetched content.
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}
