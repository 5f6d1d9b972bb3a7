use std::path::PathBuf;

/// Errors that abort a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error opening file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating output file '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File reading error after line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Error flushing output: {0}")]
    Flush(#[source] std::io::Error),
}

/// Errors confined to a single input line. The line is skipped and the run
/// continues.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("invalid format, required <hex_hash>:<salt> (separated by colon)")]
    Format,

    #[error("hash must be valid hexadecimal: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("error writing output: {0}")]
    Write(#[source] std::io::Error),
}
