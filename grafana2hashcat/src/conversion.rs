use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::LineError;

/// Algorithm tag of hashcat's PBKDF2-HMAC-SHA256 format (mode 10900).
pub const ALGORITHM: &str = "sha256";

/// Iteration count Grafana uses when deriving password hashes.
pub const ITERATIONS: u32 = 10000;

/// Strip leading and trailing whitespace from a raw input line.
///
/// UTF-8 lines lose all Unicode whitespace (NBSP, vertical tab, ideographic
/// space, ...). Other lines only lose ASCII whitespace and vertical tabs.
pub fn trim_line(line: &[u8]) -> &[u8] {
    match std::str::from_utf8(line) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => {
            let is_space = |b: &u8| b.is_ascii_whitespace() || *b == 0x0b;
            let start = line.iter().position(|b| !is_space(b)).unwrap_or(line.len());
            let end = line.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
            &line[start..end]
        }
    }
}

/// Hash and salt segments of one input line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRecord<'a> {
    pub hash_hex: &'a [u8],
    pub salt: &'a [u8],
}

/// Split a trimmed `<hex_hash>:<salt>` line into its segments.
///
/// The salt ends at the next colon if there is one; anything after a second
/// colon is dropped.
pub fn parse_line(line: &[u8]) -> Result<InputRecord<'_>, LineError> {
    let mut parts = line.split(|&b| b == b':');
    let hash_hex = parts.next().unwrap_or_default();
    let salt = parts.next().ok_or(LineError::Format)?;
    Ok(InputRecord { hash_hex, salt })
}

/// A converted line in hashcat format: `sha256:10000:<salt_b64>:<hash_b64>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashcatRecord {
    pub salt_b64: String,
    pub hash_b64: String,
}

impl HashcatRecord {
    /// Hex-decode the hash and base64-encode it alongside the raw salt bytes.
    pub fn from_input(input: &InputRecord<'_>) -> Result<Self, LineError> {
        let hash = hex::decode(input.hash_hex)?;
        Ok(Self { salt_b64: STANDARD.encode(input.salt), hash_b64: STANDARD.encode(hash) })
    }
}

impl fmt::Display for HashcatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", ALGORITHM, ITERATIONS, self.salt_b64, self.hash_b64)
    }
}

/// Convert one trimmed, non-empty input line to a hashcat record.
#[inline]
pub fn convert_line(line: &[u8]) -> Result<HashcatRecord, LineError> {
    HashcatRecord::from_input(&parse_line(line)?)
}
