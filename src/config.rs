use std::path::PathBuf;

use crate::error::Result;
use crate::input::SampleFormat;
use crate::transform::TransformParams;

/// Everything one adaptation run needs, resolved once from the command line
#[derive(Debug, Clone)]
pub struct AdaptConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_format: SampleFormat,
    pub output_format: SampleFormat,
    pub params: TransformParams,
    /// Used for WAV output when the input carries no rate
    pub sample_rate: u32,
}

impl AdaptConfig {
    /// Resolve formats from extensions and convert the angle to radians
    pub fn new(
        input: PathBuf,
        output: PathBuf,
        radius: f64,
        angle_deg: f64,
        sample_rate: u32,
    ) -> Result<Self> {
        let input_format = SampleFormat::from_path(&input)?;
        let output_format = SampleFormat::from_path(&output)?;
        let params = TransformParams::from_degrees(radius, angle_deg)?;

        Ok(Self {
            input,
            output,
            input_format,
            output_format,
            params,
            sample_rate,
        })
    }
}
