use hound::{SampleFormat as WavSampleFormat, WavSpec, WavWriter};
use std::io::Cursor;
use std::path::Path;
use crate::error::{AdaptError, Result};
use crate::input::{SampleFormat, SampleStream};

/// Sample rate for WAV output when the input has none
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;

/// Keep the low 16 bits, as an integer cast does. Out-of-range values wrap.
pub fn narrow(v: i64) -> i16 {
    v as i16
}

/// Encode samples as headerless native-endian int16, interleaved I/Q
pub fn encode_raw(stream: &SampleStream) -> Vec<u8> {
    stream
        .components()
        .flat_map(|v| narrow(v).to_ne_bytes())
        .collect()
}

/// Encode samples as "I Q" lines, newline terminated
/// Values are written in full, without narrowing to int16
pub fn encode_text(stream: &SampleStream) -> String {
    let mut out = String::with_capacity(stream.len() * 12);
    for sample in &stream.samples {
        out.push_str(&format!("{} {}\n", sample.i, sample.q));
    }
    out
}

/// Encode samples as a stereo int16 WAV (I=left, Q=right)
pub fn encode_wav(stream: &SampleStream) -> Result<Vec<u8>> {
    let spec = WavSpec {
        channels: 2,
        sample_rate: stream.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE),
        bits_per_sample: 16,
        sample_format: WavSampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for sample in &stream.samples {
            writer.write_sample(narrow(sample.i))?;
            writer.write_sample(narrow(sample.q))?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

/// Encode samples into the byte content of a file of the given format
pub fn encode(stream: &SampleStream, format: SampleFormat) -> Result<Vec<u8>> {
    match format {
        SampleFormat::Binary => Ok(encode_raw(stream)),
        SampleFormat::Text => Ok(encode_text(stream).into_bytes()),
        SampleFormat::Wav => encode_wav(stream),
    }
}

/// Encode and write samples to a file
pub fn write_samples(path: &Path, stream: &SampleStream, format: SampleFormat) -> Result<usize> {
    let content = encode(stream, format)?;
    std::fs::write(path, &content).map_err(|e| AdaptError::io(path, e))?;
    Ok(content.len())
}
