//! Converts Grafana password hashes into hashcat's hash-file format.
//!
//! Grafana stores user passwords as PBKDF2-HMAC-SHA256 digests with 10000
//! iterations, exported as a hex digest plus the user's salt. Hashcat reads
//! the same scheme as mode 10900, but expects base64 fields:
//!
//! ```text
//! 2ac9cb7dc02b3c0083eb70898e549b63:12345
//! sha256:10000:MTIzNDU=:KsnLfcArPACD63CJjlSbYw==
//! ```
//!
//! The first line is the input (`<hex_hash>:<salt>`), the second the converted
//! record (`sha256:10000:<base64_salt>:<base64_hash>`). The salt is encoded as
//! its raw bytes, the hash after hex decoding.
//!
//! # Usage
//!
//! ```sh
//! grafana2hashcat hashes.txt
//! hashcat -m 10900 out_hashes.txt -a 0 /usr/share/wordlists/rockyou.txt -O
//! ```

pub mod conversion;
pub mod converter;
pub mod error;
pub mod logging;

pub use conversion::{
    ALGORITHM, HashcatRecord, ITERATIONS, InputRecord, convert_line, parse_line, trim_line,
};
pub use converter::{LineFailure, MAX_RECORDED_FAILURES, RunStats, convert, convert_file};
pub use error::{Error, LineError};

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT: &str = "out_hashes.txt";

/// Hashcat mode for PBKDF2-HMAC-SHA256.
pub const HASHCAT_MODE: u32 = 10900;
