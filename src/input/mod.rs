pub mod raw;
pub mod text;
pub mod wav;

use std::path::Path;

use crate::error::{AdaptError, Result};

/// IQ sample pair (In-phase, Quadrature)
/// Decoded samples always fit int16. Transformed samples keep the full
/// truncated value and are only narrowed by the int16 encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IqSample {
    pub i: i64,
    pub q: i64,
}

impl IqSample {
    pub fn new(i: i64, q: i64) -> Self {
        Self { i, q }
    }
}

/// Ordered IQ samples decoded from one file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleStream {
    pub samples: Vec<IqSample>,
    /// Only known when the source is a WAV file
    pub sample_rate: Option<u32>,
}

impl SampleStream {
    pub fn new(samples: Vec<IqSample>) -> Self {
        Self {
            samples,
            sample_rate: None,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Flatten into the interleaved I, Q, I, Q... value sequence
    pub fn components(&self) -> impl Iterator<Item = i64> + '_ {
        self.samples.iter().flat_map(|s| [s.i, s.q])
    }

    /// Pair an interleaved value sequence into samples
    pub fn from_components(values: &[i16]) -> Result<Self> {
        if values.len() % 2 != 0 {
            return Err(AdaptError::UnpairedComponent {
                values: values.len(),
            });
        }
        let samples = values
            .chunks_exact(2)
            .map(|pair| IqSample::new(pair[0].into(), pair[1].into()))
            .collect();
        Ok(Self::new(samples))
    }
}

/// On-disk sample encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Raw native-endian int16, interleaved I/Q, no header (.dat)
    Binary,
    /// One "I Q" pair per line (.txt)
    Text,
    /// Stereo int16 PCM, I=left, Q=right (.wav)
    Wav,
}

impl SampleFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "dat" => Some(SampleFormat::Binary),
            "txt" => Some(SampleFormat::Text),
            "wav" => Some(SampleFormat::Wav),
            _ => None,
        }
    }

    /// Resolve the format of a sample file from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| AdaptError::UnknownFormat {
                path: path.to_path_buf(),
            })
    }
}

/// Decode the raw contents of a sample file
pub fn decode(content: &[u8], format: SampleFormat) -> Result<SampleStream> {
    match format {
        SampleFormat::Binary => raw::decode_raw(content),
        SampleFormat::Text => text::decode_text(content),
        SampleFormat::Wav => wav::decode_wav(content),
    }
}

/// Read and decode a sample file
pub fn read_samples(path: &Path, format: SampleFormat) -> Result<SampleStream> {
    let content = std::fs::read(path).map_err(|e| AdaptError::io(path, e))?;
    decode(&content, format)
}
