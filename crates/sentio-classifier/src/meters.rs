use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One physiological sample, positional order `[heart rate, GSR, temperature]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    pub heart_rate: f64,
    pub galvanic_skin_response: f64,
    pub temperature: f64,
}

impl MeterReading {
    pub fn new(heart_rate: f64, galvanic_skin_response: f64, temperature: f64) -> Self {
        Self {
            heart_rate,
            galvanic_skin_response,
            temperature,
        }
    }

    /// Reads the first three values. Returns `None` when there is no usable
    /// signal: fewer than three values, or a non-finite one among them.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values {
            [heart_rate, gsr, temperature, ..]
                if heart_rate.is_finite() && gsr.is_finite() && temperature.is_finite() =>
            {
                Some(Self::new(*heart_rate, *gsr, *temperature))
            }
            _ => None,
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.heart_rate, self.galvanic_skin_response, self.temperature]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeterParseError {
    #[error("meter value {position} is not a number: {token:?}")]
    InvalidValue { position: usize, token: String },
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<MeterParseError>,
    },
}

/// Parses one reading written as comma and/or whitespace separated numbers.
///
/// The value count is not checked here; short readings are the classifier's
/// business.
pub fn parse_meters(input: &str) -> Result<Vec<f64>, MeterParseError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| MeterParseError::InvalidValue {
                position: index + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses one reading per line, skipping blank lines and `#` comments.
pub fn parse_meter_lines(input: &str) -> Result<Vec<Vec<f64>>, MeterParseError> {
    let mut readings = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let values = parse_meters(trimmed).map_err(|source| MeterParseError::Line {
            line: index + 1,
            source: Box::new(source),
        })?;
        readings.push(values);
    }
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_three_values() {
        assert_eq!(MeterReading::from_slice(&[]), None);
        assert_eq!(MeterReading::from_slice(&[72.0, 6.0]), None);
        assert_eq!(
            MeterReading::from_slice(&[72.0, 6.0, 36.9, 99.0]),
            Some(MeterReading::new(72.0, 6.0, 36.9))
        );
    }

    #[test]
    fn non_finite_values_are_unusable() {
        assert_eq!(MeterReading::from_slice(&[f64::NAN, 6.0, 36.9]), None);
        assert_eq!(MeterReading::from_slice(&[72.0, f64::INFINITY, 36.9]), None);
    }

    #[test]
    fn parses_mixed_separators() {
        assert_eq!(parse_meters("90, 12,37.0").unwrap(), vec![90.0, 12.0, 37.0]);
        assert_eq!(parse_meters("  60 3\t35.5 ").unwrap(), vec![60.0, 3.0, 35.5]);
        assert_eq!(parse_meters("").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn reports_bad_token_position() {
        let err = parse_meters("90, fast, 37").unwrap_err();
        assert_eq!(
            err,
            MeterParseError::InvalidValue {
                position: 2,
                token: "fast".into()
            }
        );
    }

    #[test]
    fn batch_skips_comments_and_reports_line() {
        let batch = "# hr gsr temp\n90,12,37.0\n\n70 5 36.5\n";
        assert_eq!(
            parse_meter_lines(batch).unwrap(),
            vec![vec![90.0, 12.0, 37.0], vec![70.0, 5.0, 36.5]]
        );

        let err = parse_meter_lines("70,5,36.5\n70,x,36.5").unwrap_err();
        assert!(matches!(err, MeterParseError::Line { line: 2, .. }));
        assert!(err.to_string().starts_with("line 2: meter value 2"));
    }
}
