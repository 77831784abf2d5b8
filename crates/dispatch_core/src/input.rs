//! Instance file parsing.
//!
//! Format: a header line `rows cols vehicles rides bonus steps`, then one
//! line per ride `start_x start_y end_x end_y earliest_start latest_finish`.
//! Fields are whitespace separated; anything after the sixth field on a line
//! and anything after the last ride line is ignored.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DispatchError;
use crate::ride::{GridPoint, InstanceHeader, ProblemInstance, RideRequest};

const FIELDS_PER_RECORD: usize = 6;

/// Parses a whole instance. Fails on the first malformed line.
pub fn parse_instance(text: &str) -> Result<ProblemInstance, DispatchError> {
    let mut lines = text.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| DispatchError::malformed(1, "missing header line"))?;
    let header = parse_header(header_line)?;

    let mut rides = Vec::new();
    for index in 0..header.ride_count {
        let line_no = index + 2;
        let line = lines.next().ok_or_else(|| {
            DispatchError::malformed(
                line_no,
                format!(
                    "expected {} ride records, input ends after {index}",
                    header.ride_count
                ),
            )
        })?;
        rides.push(parse_ride(index, line_no, line)?);
    }

    debug!(
        vehicles = header.vehicle_count,
        rides = rides.len(),
        step_limit = header.step_limit,
        "instance parsed"
    );
    Ok(ProblemInstance { header, rides })
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<ProblemInstance, DispatchError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DispatchError::io(path, source))?;
    parse_instance(&text)
}

fn parse_header(line: &str) -> Result<InstanceHeader, DispatchError> {
    let [rows, cols, vehicles, rides, bonus, steps] = parse_record(1, line)?;
    Ok(InstanceHeader {
        grid_rows: narrow(1, rows)?,
        grid_cols: narrow(1, cols)?,
        vehicle_count: narrow(1, vehicles)?,
        ride_count: narrow(1, rides)?,
        bonus,
        step_limit: steps,
    })
}

fn parse_ride(index: usize, line_no: usize, line: &str) -> Result<RideRequest, DispatchError> {
    let [start_x, start_y, end_x, end_y, earliest, latest] = parse_record(line_no, line)?;
    let start = GridPoint::new(narrow(line_no, start_x)?, narrow(line_no, start_y)?);
    let end = GridPoint::new(narrow(line_no, end_x)?, narrow(line_no, end_y)?);
    Ok(RideRequest::new(index, start, end).with_window(earliest, latest))
}

fn parse_record(line_no: usize, line: &str) -> Result<[u64; FIELDS_PER_RECORD], DispatchError> {
    let mut fields = [0u64; FIELDS_PER_RECORD];
    let mut tokens = line.split_whitespace();
    for (found, field) in fields.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| {
            DispatchError::malformed(
                line_no,
                format!("expected {FIELDS_PER_RECORD} integer fields, found {found}"),
            )
        })?;
        *field = token.parse().map_err(|_| {
            DispatchError::malformed(
                line_no,
                format!("`{token}` is not a non-negative integer"),
            )
        })?;
    }
    Ok(fields)
}

fn narrow<T: TryFrom<u64>>(line_no: usize, value: u64) -> Result<T, DispatchError> {
    T::try_from(value)
        .map_err(|_| DispatchError::malformed(line_no, format!("{value} is out of range")))
}
