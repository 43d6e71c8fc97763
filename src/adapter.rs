use tracing::{debug, info, warn};

use crate::config::AdaptConfig;
use crate::error::Result;
use crate::input::{read_samples, SampleFormat};
use crate::output::write_samples;
use crate::transform::{transform, TransformReport};

/// Read a sample file, scale and rotate every sample, write the result
pub fn process_file(config: &AdaptConfig) -> Result<TransformReport> {
    debug!(
        path = %config.input.display(),
        format = ?config.input_format,
        "Reading sample file"
    );
    let samples = read_samples(&config.input, config.input_format)?;

    info!(
        samples = samples.len(),
        sample_rate = ?samples.sample_rate,
        "Loaded samples"
    );
    if samples.is_empty() {
        warn!(path = %config.input.display(), "Input holds no samples");
    }
    debug!(
        radius_scale = config.params.radius_scale,
        phase_offset_rad = config.params.phase_offset,
        "Applying transform"
    );

    let mut adapted = transform(&samples, &config.params);
    let report = TransformReport::from_stream(&adapted);

    if report.out_of_range > 0 && config.output_format != SampleFormat::Text {
        warn!(
            out_of_range = report.out_of_range,
            peak_magnitude = report.peak_magnitude,
            "Output exceeds int16 range, values wrapped"
        );
    }

    if adapted.sample_rate.is_none() {
        adapted.sample_rate = Some(config.sample_rate);
    }

    let bytes = write_samples(&config.output, &adapted, config.output_format)?;
    info!(
        path = %config.output.display(),
        format = ?config.output_format,
        samples = report.samples,
        bytes,
        "Wrote adapted samples"
    );

    Ok(report)
}
