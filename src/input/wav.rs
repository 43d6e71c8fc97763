use hound::{SampleFormat, WavReader};
use std::io::Cursor;
use super::SampleStream;
use crate::error::{AdaptError, Result};

/// Decode IQ samples from a WAV file held in memory
/// Expects stereo int16 PCM: I=left channel, Q=right channel
pub fn decode_wav(content: &[u8]) -> Result<SampleStream> {
    let mut reader = WavReader::new(Cursor::new(content))?;
    let spec = reader.spec();

    // Validate format
    if spec.channels != 2 {
        return Err(AdaptError::WavLayout(format!(
            "expected stereo WAV (I/Q), got {} channels",
            spec.channels
        )));
    }
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(AdaptError::WavLayout(format!(
            "expected 16-bit integer PCM, got {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let values = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()?;

    let mut stream = SampleStream::from_components(&values)?;
    stream.sample_rate = Some(spec.sample_rate);
    Ok(stream)
}
