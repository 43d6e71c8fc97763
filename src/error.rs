//! Error types for sample adaptation

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdaptError>;

/// Errors that can occur while decoding, transforming or writing samples
#[derive(Error, Debug)]
pub enum AdaptError {
    /// File extension is not one of .dat, .txt or .wav
    #[error("Unknown file: {} (expected .dat, .txt or .wav)", path.display())]
    UnknownFormat { path: PathBuf },

    #[error("Malformed binary input: {len} bytes is not a whole number of int16 values")]
    OddByteLength { len: usize },

    #[error("Malformed input: {values} int16 values cannot be paired into I/Q samples")]
    UnpairedComponent { values: usize },

    #[error("Malformed text input at line {line}: expected 2 tokens, found {found}")]
    TokenCount { line: usize, found: usize },

    #[error("Malformed text input at line {line}: invalid int16 value {token:?}")]
    BadInteger {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Malformed text input: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    /// WAV file is not stereo int16 PCM
    #[error("Unsupported WAV layout: {0}")]
    WavLayout(String),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AdaptError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AdaptError::Io {
            path: path.into(),
            source,
        }
    }
}
