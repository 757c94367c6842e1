//! Parsing delimited text records into typed observations.
//!
//! The analytic core assumes well-typed input; this module is the boundary
//! where string records are validated. A leading header row is tolerated
//! and skipped when its first field is not a number.

use crate::core::Observation;
use crate::error::{ModelError, Result};

/// Parse one `period,value` record. `line` is used for error reporting only.
pub fn parse_record(line: usize, record: &str) -> Result<Observation> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(ModelError::InvalidRecord {
            line,
            reason: format!("expected 2 fields, got {}", fields.len()),
        });
    }

    let period: i64 = fields[0].parse().map_err(|_| ModelError::InvalidRecord {
        line,
        reason: format!("unparseable period '{}'", fields[0]),
    })?;

    let value: f64 = fields[1].parse().map_err(|_| ModelError::InvalidRecord {
        line,
        reason: format!("unparseable value '{}'", fields[1]),
    })?;
    if !value.is_finite() {
        return Err(ModelError::NonFiniteValue {
            line,
            value: fields[1].to_string(),
        });
    }

    Ok(Observation::new(period, value))
}

/// Parse a whole delimited document into observations.
///
/// Blank lines are skipped. A first non-blank line whose leading field does
/// not parse as an integer is treated as a header and skipped. An input
/// with no data rows at all is an error.
pub fn parse_delimited(text: &str) -> Result<Vec<Observation>> {
    let mut data = Vec::new();
    let mut seen_row = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }

        if !seen_row {
            seen_row = true;
            let first_field = record.split(',').next().unwrap_or("").trim();
            if first_field.parse::<i64>().is_err() {
                continue;
            }
        }

        data.push(parse_record(line, record)?);
    }

    if data.is_empty() {
        return Err(ModelError::EmptyData);
    }
    Ok(data)
}
