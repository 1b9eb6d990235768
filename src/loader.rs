//! CSV city loader.
//!
//! Expects a header row followed by `name,latitude,longitude` rows.
//! Fields may be double-quoted (with `""` as an escaped quote); columns
//! past the third are ignored. Blank lines are skipped and row order is
//! kept as the city order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::geo::{City, CitySet};

/// Loads a city set from a CSV file.
pub fn load_cities(path: impl AsRef<Path>) -> Result<CitySet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cities = read_cities(BufReader::new(file)).map_err(|err| match err {
        LoadError::Read(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!(path = %path.display(), cities = cities.len(), "loaded cities");
    Ok(cities)
}

/// Parses a city set from CSV text.
///
/// # Examples
///
/// ```
/// use u_tsp_mcmc::loader::parse_cities;
///
/// let csv = "city,lat,lon\nReno,39.5296,-119.8138\n\"Carson City, NV\",39.1638,-119.7674\n";
/// let cities = parse_cities(csv).unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities.city(1).name, "Carson City, NV");
/// ```
pub fn parse_cities(text: &str) -> Result<CitySet, LoadError> {
    read_cities(text.as_bytes())
}

/// Parses a city set from any buffered reader.
pub fn read_cities<R: BufRead>(reader: R) -> Result<CitySet, LoadError> {
    let mut header_seen = false;
    let mut cities = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(LoadError::Read)?;
        if !header_seen {
            header_seen = true;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        cities.push(parse_row(&line, index + 1)?);
    }

    if !header_seen {
        return Err(LoadError::MissingHeader);
    }
    Ok(CitySet::new(cities)?)
}

fn parse_row(line: &str, line_no: usize) -> Result<City, LoadError> {
    let fields = split_fields(line).map_err(|reason| LoadError::MalformedRow {
        line: line_no,
        reason,
    })?;
    if fields.len() < 3 {
        return Err(LoadError::MalformedRow {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }

    let name = fields[0].trim();
    if name.is_empty() {
        return Err(LoadError::MalformedRow {
            line: line_no,
            reason: "empty city name".into(),
        });
    }
    let latitude = parse_coordinate(&fields[1], "latitude", line_no)?;
    let longitude = parse_coordinate(&fields[2], "longitude", line_no)?;
    Ok(City::new(name, latitude, longitude))
}

fn parse_coordinate(raw: &str, field: &'static str, line: usize) -> Result<f64, LoadError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidCoordinate {
            line,
            field,
            value: raw.to_string(),
        })
}

/// Splits one CSV record, honoring double quotes.
fn split_fields(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    if in_quotes {
        return Err("unterminated quoted field".into());
    }
    fields.push(field);
    Ok(fields)
}
