use super::{IqSample, SampleStream};
use crate::error::{AdaptError, Result};

/// Decode "I Q" lines. Blank lines are skipped, anything else must hold
/// exactly two int16 tokens.
pub fn decode_text(content: &[u8]) -> Result<SampleStream> {
    let content = std::str::from_utf8(content)?;
    let mut samples = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 2 {
            return Err(AdaptError::TokenCount {
                line: line_no,
                found: tokens.len(),
            });
        }

        let i = parse_component(tokens[0], line_no)?;
        let q = parse_component(tokens[1], line_no)?;
        samples.push(IqSample::new(i.into(), q.into()));
    }

    Ok(SampleStream::new(samples))
}

fn parse_component(token: &str, line: usize) -> Result<i16> {
    token.parse::<i16>().map_err(|source| AdaptError::BadInteger {
        line,
        token: token.to_string(),
        source,
    })
}
