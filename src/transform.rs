use crate::error::{AdaptError, Result};
use crate::input::{IqSample, SampleStream};

/// Radius scale and phase offset applied to every sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub radius_scale: f64,
    /// Radians
    pub phase_offset: f64,
}

impl TransformParams {
    pub fn new(radius_scale: f64, phase_offset: f64) -> Result<Self> {
        if !radius_scale.is_finite() || radius_scale < 0.0 {
            return Err(AdaptError::InvalidParameters(format!(
                "radius must be a finite non-negative number, got {}",
                radius_scale
            )));
        }
        if !phase_offset.is_finite() {
            return Err(AdaptError::InvalidParameters(format!(
                "angle must be finite, got {}",
                phase_offset
            )));
        }
        Ok(Self {
            radius_scale,
            phase_offset,
        })
    }

    pub fn from_degrees(radius_scale: f64, angle_deg: f64) -> Result<Self> {
        Self::new(radius_scale, angle_deg.to_radians())
    }
}

/// Summary of one transform pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformReport {
    pub samples: usize,
    /// Components outside int16, which wrap when written as .dat or .wav
    pub out_of_range: usize,
    pub peak_magnitude: f64,
}

impl TransformReport {
    pub fn from_stream(stream: &SampleStream) -> Self {
        let mut report = TransformReport {
            samples: stream.len(),
            ..Default::default()
        };
        for sample in &stream.samples {
            let magnitude = (sample.i as f64).hypot(sample.q as f64);
            report.peak_magnitude = report.peak_magnitude.max(magnitude);
            report.out_of_range += [sample.i, sample.q]
                .iter()
                .filter(|&&v| i16::try_from(v).is_err())
                .count();
        }
        report
    }
}

/// Scale and rotate one point in the polar domain, returning (I', Q')
/// before quantization. atan2(0, 0) is 0, so the origin stays at the origin.
pub fn rotate(i: f64, q: f64, params: &TransformParams) -> (f64, f64) {
    let r = i.hypot(q) * params.radius_scale;
    let phi = q.atan2(i) + params.phase_offset;
    (r * phi.cos(), r * phi.sin())
}

/// Truncate toward zero
pub fn truncate(x: f64) -> i64 {
    x.trunc() as i64
}

/// Scale and rotate every sample, truncating the results
pub fn transform(stream: &SampleStream, params: &TransformParams) -> SampleStream {
    let samples = stream
        .samples
        .iter()
        .map(|s| {
            let (i, q) = rotate(s.i as f64, s.q as f64, params);
            IqSample::new(truncate(i), truncate(q))
        })
        .collect();

    SampleStream {
        samples,
        sample_rate: stream.sample_rate,
    }
}
