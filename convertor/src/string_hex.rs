use crate::error::Result;

/// Concatenates the lowercase hex of every UTF-16 code unit, unpadded, so a
/// character outside the BMP becomes its surrogate pair.
pub fn string_to_hex(src: &str) -> String {
    src.encode_utf16().map(|unit| format!("{:x}", unit)).collect()
}

/// Decodes hex pairs into characters, one per byte.
pub fn hex_to_string(hex: &str) -> Result<String> {
    let trimmed = hex.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|e| {
        log::warn!("illegal format ASCII code {:?}: {}", hex, e);
        e
    })?;
    Ok(bytes.into_iter().map(char::from).collect())
}
