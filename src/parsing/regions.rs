use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

use crate::core::Region;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected 3 comma-separated fields (chromosome,start,end): '{0}'")]
    FieldCount(String),

    #[error("empty chromosome name: '{0}'")]
    EmptyChromosome(String),

    #[error("invalid coordinate '{value}': '{line}'")]
    InvalidCoordinate { value: String, line: String },
}

/// Lazy, single-pass source of [`Region`] values read from a regions file.
///
/// One region per non-empty line, in file order. The underlying file handle
/// is held for the duration of iteration and released when the source is
/// dropped, whether iteration completed or aborted on an error.
#[derive(Debug)]
pub struct RegionSource {
    lines: Lines<BufReader<File>>,
}

impl RegionSource {
    /// Open a regions file for iteration.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for RegionSource {
    type Item = Result<Region, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(parse_region_line(&line));
                }
                Err(e) => return Some(Err(ParseError::Io(e))),
            }
        }
    }
}

/// Parse a single `chromosome,start,end` line into a [`Region`].
///
/// # Errors
///
/// Returns `ParseError::FieldCount` if the line does not have exactly three
/// comma-separated fields, `ParseError::EmptyChromosome` if the first field
/// is blank, or `ParseError::InvalidCoordinate` if a coordinate does not
/// parse as an unsigned integer. Error messages carry the offending line.
pub fn parse_region_line(line: &str) -> Result<Region, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() != 3 {
        return Err(ParseError::FieldCount(line.to_string()));
    }

    let chromosome = fields[0];
    if chromosome.is_empty() {
        return Err(ParseError::EmptyChromosome(line.to_string()));
    }

    let start = parse_coordinate(fields[1], line)?;
    let end = parse_coordinate(fields[2], line)?;

    Ok(Region::new(chromosome, start, end))
}

fn parse_coordinate(value: &str, line: &str) -> Result<u64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidCoordinate {
        value: value.to_string(),
        line: line.to_string(),
    })
}
