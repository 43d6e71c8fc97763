use super::SampleStream;
use crate::error::{AdaptError, Result};

/// Decode a headerless buffer of native-endian int16 values, interleaved I/Q
pub fn decode_raw(buffer: &[u8]) -> Result<SampleStream> {
    if buffer.len() % 2 != 0 {
        return Err(AdaptError::OddByteLength { len: buffer.len() });
    }

    let values: Vec<i16> = buffer
        .chunks_exact(2)
        .map(|chunk| i16::from_ne_bytes([chunk[0], chunk[1]]))
        .collect();

    SampleStream::from_components(&values)
}
